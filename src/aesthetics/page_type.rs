//! Page-Type Query
//!
//! The single entry point rendering uses to learn whether the current page is
//! the plain CV or an enhanced section.

use serde::{Deserialize, Serialize};

use super::classifier::should_apply_aesthetics;
use super::config::{get_safe_config, AestheticConfig, SAFE_AESTHETIC_CONFIG};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Professional landing page, never decorated
    #[default]
    Cv,
    /// Project gallery and education timeline
    Enhanced,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Cv => "cv",
            PageType::Enhanced => "enhanced",
        }
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self, PageType::Enhanced)
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the visitor currently is, as reported by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub pathname: String,
    pub locale: String,
}

impl NavigationContext {
    pub fn new(pathname: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            locale: locale.into(),
        }
    }

    pub fn page_type(&self) -> PageType {
        page_type(self)
    }
}

pub fn page_type(nav: &NavigationContext) -> PageType {
    if should_apply_aesthetics(&nav.pathname, &nav.locale) {
        PageType::Enhanced
    } else {
        PageType::Cv
    }
}

/// Configuration a page should actually render with. CV pages always get the
/// all-off projection regardless of site settings.
pub fn effective_aesthetics(nav: &NavigationContext, config: &AestheticConfig) -> AestheticConfig {
    match page_type(nav) {
        PageType::Cv => SAFE_AESTHETIC_CONFIG,
        PageType::Enhanced => get_safe_config(config),
    }
}
