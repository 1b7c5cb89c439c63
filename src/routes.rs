//! Site Routing
//!
//! Maps a raw request path onto a locale and one of the site's pages.

use anyhow::Result;
use regex::Regex;

use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRoute {
    Cv,
    Projects,
    Project(String),
    Education,
}

impl SiteRoute {
    pub fn path(&self, locale: Locale) -> String {
        match self {
            SiteRoute::Cv => format!("/{}", locale),
            SiteRoute::Projects => format!("/{}/projects", locale),
            SiteRoute::Project(slug) => format!("/{}/projects/{}", locale, slug),
            SiteRoute::Education => format!("/{}/education", locale),
        }
    }
}

/// Resolves request paths to pages
#[derive(Debug, Clone)]
pub struct SiteRouter {
    slug_re: Regex,
}

impl SiteRouter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            slug_re: Regex::new(r"^[a-z0-9][a-z0-9-]*$")?,
        })
    }

    /// `None` means the path is not a page of this site.
    pub fn resolve(&self, path: &str) -> Option<(Locale, SiteRoute)> {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        let mut segments = trimmed.strip_prefix('/')?.split('/');
        let locale = Locale::parse(segments.next()?)?;

        let route = match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => SiteRoute::Cv,
            (Some("projects"), None, _) => SiteRoute::Projects,
            (Some("projects"), Some(slug), None) if self.slug_re.is_match(slug) => {
                SiteRoute::Project(slug.to_string())
            }
            (Some("education"), None, _) => SiteRoute::Education,
            _ => return None,
        };

        Some((locale, route))
    }
}
