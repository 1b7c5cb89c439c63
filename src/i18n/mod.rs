//! Locales
//!
//! The two site languages, request negotiation, and the UI string tables.

mod messages;

pub use messages::Messages;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-hk")]
    ZhHk,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhHk];

    /// URL segment for the locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHk => "zh-hk",
        }
    }

    /// Exact match on the URL segment
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == tag)
    }

    /// Value for the `lang` attribute
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHk => "zh-Hant-HK",
        }
    }

    /// The locale offered by the language switcher
    pub fn other(&self) -> Locale {
        match self {
            Locale::En => Locale::ZhHk,
            Locale::ZhHk => Locale::En,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        Messages::for_locale(*self)
    }

    /// Pick a locale from an `Accept-Language` header, honouring q-values.
    pub fn negotiate(accept_language: Option<&str>, fallback: Locale) -> Locale {
        let Some(header) = accept_language else {
            return fallback;
        };

        let mut ranges: Vec<(String, f32)> = header
            .split(',')
            .filter_map(|item| {
                let mut parts = item.split(';');
                let tag = parts.next()?.trim().to_ascii_lowercase();
                if tag.is_empty() {
                    return None;
                }
                let quality = parts
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((tag, quality))
            })
            .filter(|(_, quality)| *quality > 0.0)
            .collect();

        // stable, so equal weights keep header order
        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges
            .iter()
            .find_map(|(tag, _)| Self::from_language_range(tag))
            .unwrap_or(fallback)
    }

    fn from_language_range(tag: &str) -> Option<Locale> {
        if tag == "en" || tag.starts_with("en-") {
            Some(Locale::En)
        } else if tag == "zh" || tag.starts_with("zh-") || tag == "yue" || tag.starts_with("yue-") {
            Some(Locale::ZhHk)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("zh-hk"), Some(Locale::ZhHk));
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_negotiate() {
        assert_eq!(Locale::negotiate(None, Locale::En), Locale::En);
        assert_eq!(Locale::negotiate(Some("zh-HK,zh;q=0.9,en;q=0.8"), Locale::En), Locale::ZhHk);
        assert_eq!(Locale::negotiate(Some("en-GB,en;q=0.9"), Locale::ZhHk), Locale::En);
        assert_eq!(Locale::negotiate(Some("fr-FR,en;q=0.3,zh-TW;q=0.7"), Locale::En), Locale::ZhHk);
        assert_eq!(Locale::negotiate(Some("de,fr"), Locale::ZhHk), Locale::ZhHk);
        assert_eq!(Locale::negotiate(Some("zh;q=0,en"), Locale::ZhHk), Locale::En);
        assert_eq!(Locale::negotiate(Some(""), Locale::En), Locale::En);
    }

    #[test]
    fn test_other_and_serde() {
        assert_eq!(Locale::En.other(), Locale::ZhHk);
        assert_eq!(serde_json::to_string(&Locale::ZhHk).unwrap(), "\"zh-hk\"");
        assert_eq!(Locale::ZhHk.to_string(), "zh-hk");
    }
}
