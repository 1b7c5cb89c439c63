use serde::Serialize;

use super::Locale;

/// Static UI strings for one locale
#[derive(Debug, Serialize)]
pub struct Messages {
    pub site_title: &'static str,
    pub nav_cv: &'static str,
    pub nav_projects: &'static str,
    pub nav_education: &'static str,
    pub switch_locale: &'static str,
    pub summary_heading: &'static str,
    pub courses_heading: &'static str,
    pub highlights_heading: &'static str,
    pub recent_heading: &'static str,
    pub contact_heading: &'static str,
    pub projects_heading: &'static str,
    pub projects_intro: &'static str,
    pub education_heading: &'static str,
    pub education_intro: &'static str,
    pub tech_label: &'static str,
    pub repository_label: &'static str,
    pub back_to_projects: &'static str,
    pub kind_education: &'static str,
    pub kind_work: &'static str,
    pub kind_award: &'static str,
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub print_hint: &'static str,
    pub footer_note: &'static str,
}

static EN: Messages = Messages {
    site_title: "Curriculum Vitae",
    nav_cv: "CV",
    nav_projects: "Projects",
    nav_education: "Education",
    switch_locale: "中文",
    summary_heading: "Summary",
    courses_heading: "Selected Coursework",
    highlights_heading: "Project Highlights",
    recent_heading: "Recent Milestones",
    contact_heading: "Contact",
    projects_heading: "Project Gallery",
    projects_intro: "Things I have designed, built and shipped.",
    education_heading: "Education & Experience",
    education_intro: "A timeline of study, work and recognition.",
    tech_label: "Stack",
    repository_label: "Source",
    back_to_projects: "Back to all projects",
    kind_education: "Education",
    kind_work: "Work",
    kind_award: "Award",
    not_found_title: "Page not found",
    not_found_body: "The page you asked for does not exist.",
    print_hint: "This page is formatted for printing.",
    footer_note: "Server-rendered in Rust.",
};

static ZH_HK: Messages = Messages {
    site_title: "個人履歷",
    nav_cv: "履歷",
    nav_projects: "項目",
    nav_education: "學歷",
    switch_locale: "English",
    summary_heading: "簡介",
    courses_heading: "修讀科目",
    highlights_heading: "精選項目",
    recent_heading: "近期里程碑",
    contact_heading: "聯絡",
    projects_heading: "項目展覽",
    projects_intro: "我設計、開發及發佈過的作品。",
    education_heading: "學歷及經驗",
    education_intro: "學習、工作與獎項的時間線。",
    tech_label: "技術",
    repository_label: "原始碼",
    back_to_projects: "返回所有項目",
    kind_education: "學歷",
    kind_work: "工作",
    kind_award: "獎項",
    not_found_title: "找不到頁面",
    not_found_body: "你要求的頁面並不存在。",
    print_hint: "此頁面已為列印排版。",
    footer_note: "以 Rust 伺服器渲染。",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::ZhHk => &ZH_HK,
        }
    }
}
