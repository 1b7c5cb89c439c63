use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration failures. The decorative core itself never
/// surfaces errors.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}
