//! CV Portfolio
//!
//! A bilingual résumé and portfolio site:
//! - Plain, printable CV landing page per locale
//! - Project gallery and education timeline with an opt-in decorative layer
//! - Deterministic scatter/tilt layouts driven by a seeded noise function
//! - Validated aesthetic configuration that always degrades to safe defaults

pub mod aesthetics;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod render;
pub mod routes;
pub mod server;
pub mod utils;

// Re-exports for convenience
pub use aesthetics::{should_apply_aesthetics, AestheticConfig, NavigationContext, PageType};
pub use config::SiteConfig;
pub use error::SiteError;
pub use i18n::Locale;
pub use layout::{generate_layout, seeded_random, LayoutMemo};
pub use render::Renderer;
pub use server::{build_router, run_server, AppState};
