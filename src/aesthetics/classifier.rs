//! Page Classifier
//!
//! Decides whether a navigation path belongs to an enhanced section. The locale
//! root is the CV page and is never decorated; unknown sections fail closed.

use tracing::trace;

/// Top-level sections that carry decorations
pub const ENHANCED_SECTIONS: [&str; 2] = ["projects", "education"];

/// Classify `pathname` for `locale`. Total: the locale is an opaque token and
/// any string pair yields an answer, so there is no failure path to absorb.
pub fn should_apply_aesthetics(pathname: &str, locale: &str) -> bool {
    let normalized = strip_one_trailing_slash(pathname);
    let cv_root = format!("/{}", locale);

    let is_cv = normalized == cv_root;
    let is_enhanced = ENHANCED_SECTIONS
        .iter()
        .any(|section| is_under_section(normalized, &cv_root, section));

    let enhanced = is_enhanced && !is_cv;
    trace!("Classified {:?} ({:?}) as enhanced={}", pathname, locale, enhanced);
    enhanced
}

fn strip_one_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

// Prefix match that only accepts a whole segment: `/en/projects` and
// `/en/projects/x` qualify, `/en/projects-old` does not.
fn is_under_section(path: &str, cv_root: &str, section: &str) -> bool {
    path.strip_prefix(cv_root)
        .and_then(|rest| rest.strip_prefix('/'))
        .and_then(|rest| rest.strip_prefix(section))
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
