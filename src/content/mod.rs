//! Content Catalog
//!
//! Hard-coded résumé data. Every user-facing string carries both languages.

mod courses;
mod projects;
mod timeline;

pub use courses::{Course, COURSES};
pub use projects::{project_by_slug, Project, PROJECTS};
pub use timeline::{timeline_sorted, TimelineEvent, TimelineKind, TIMELINE};

use crate::i18n::Locale;

/// A string in both site languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub zh_hk: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, zh_hk: &'static str) -> Self {
        Self { en, zh_hk }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::ZhHk => self.zh_hk,
        }
    }
}

#[derive(Debug)]
pub struct Profile {
    pub name: LocalizedText,
    pub headline: LocalizedText,
    pub location: LocalizedText,
    pub summary: LocalizedText,
    pub email: &'static str,
    pub github: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: LocalizedText::new("Kit Lam", "林傑"),
    headline: LocalizedText::new(
        "Software engineer · full-stack & mobile",
        "軟件工程師 · 全端及流動應用",
    ),
    location: LocalizedText::new("Hong Kong", "香港"),
    summary: LocalizedText::new(
        "Computer science graduate who enjoys turning messy real-world data into \
         calm, fast interfaces. Comfortable across mobile, web and backend work, \
         with a soft spot for typed languages and careful tooling.",
        "電腦科學畢業生，喜歡把雜亂的真實數據變成清晰、快速的介面。\
         熟悉流動應用、網頁及後端開發，特別重視型別語言和嚴謹的工具。",
    ),
    email: "hello@kitlam.dev",
    github: "https://github.com/kitlam",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_text() {
        let text = LocalizedText::new("Projects", "項目");
        assert_eq!(text.get(Locale::En), "Projects");
        assert_eq!(text.get(Locale::ZhHk), "項目");
    }

    #[test]
    fn test_catalog_fully_translated() {
        for project in PROJECTS {
            for text in [project.title, project.summary, project.description] {
                assert!(!text.en.is_empty() && !text.zh_hk.is_empty(), "{}", project.slug);
            }
        }
        for event in TIMELINE {
            assert!(!event.title.en.is_empty() && !event.title.zh_hk.is_empty());
        }
        for course in COURSES {
            assert!(!course.name.en.is_empty() && !course.name.zh_hk.is_empty());
        }
    }
}
