use chrono::NaiveDate;
use serde::Serialize;

use super::LocalizedText;
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Education,
    Work,
    Award,
}

#[derive(Debug)]
pub struct TimelineEvent {
    pub year: i32,
    pub month: u32,
    pub kind: TimelineKind,
    pub title: LocalizedText,
    pub organisation: LocalizedText,
    pub description: LocalizedText,
}

impl TimelineEvent {
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn date_label(&self, locale: Locale) -> String {
        match (locale, self.start_date()) {
            (Locale::En, Some(date)) => date.format("%b %Y").to_string(),
            (Locale::ZhHk, Some(_)) => format!("{}年{}月", self.year, self.month),
            (_, None) => self.year.to_string(),
        }
    }
}

pub static TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: 2019,
        month: 9,
        kind: TimelineKind::Education,
        title: LocalizedText::new("BSc Computer Science", "電腦科學理學士"),
        organisation: LocalizedText::new("The University of Hong Kong", "香港大學"),
        description: LocalizedText::new(
            "Major in computer science with a minor in linguistics; final-year project on Cantonese input methods.",
            "主修電腦科學，副修語言學；畢業專題研究粵語輸入法。",
        ),
    },
    TimelineEvent {
        year: 2021,
        month: 6,
        kind: TimelineKind::Work,
        title: LocalizedText::new("Software Engineering Intern", "軟件工程實習生"),
        organisation: LocalizedText::new("Marine Department Digital Team", "海事處數碼團隊"),
        description: LocalizedText::new(
            "Prototyped the vessel-tracking service that later grew into Harbour Telemetry.",
            "開發船隻追蹤服務原型，後來發展成維港遙測項目。",
        ),
    },
    TimelineEvent {
        year: 2022,
        month: 4,
        kind: TimelineKind::Award,
        title: LocalizedText::new("Dean's Honours List", "院長嘉許名單"),
        organisation: LocalizedText::new("Faculty of Engineering, HKU", "香港大學工程學院"),
        description: LocalizedText::new(
            "Recognised for academic performance in the 2021–22 academic year.",
            "表揚 2021–22 學年的學業成績。",
        ),
    },
    TimelineEvent {
        year: 2023,
        month: 7,
        kind: TimelineKind::Education,
        title: LocalizedText::new("Graduated with First Class Honours", "以一級榮譽畢業"),
        organisation: LocalizedText::new("The University of Hong Kong", "香港大學"),
        description: LocalizedText::new(
            "Capstone: low-latency streaming of public transport telemetry.",
            "畢業專題：公共交通遙測數據的低延遲串流。",
        ),
    },
    TimelineEvent {
        year: 2023,
        month: 9,
        kind: TimelineKind::Work,
        title: LocalizedText::new("Software Engineer", "軟件工程師"),
        organisation: LocalizedText::new("Lantern Labs", "燈籠實驗室"),
        description: LocalizedText::new(
            "Building mobile and backend features for a bilingual food-delivery platform.",
            "為雙語外賣平台開發流動應用及後端功能。",
        ),
    },
];

/// Events ordered newest first
pub fn timeline_sorted() -> Vec<&'static TimelineEvent> {
    let mut events: Vec<&'static TimelineEvent> = TIMELINE.iter().collect();
    events.sort_by(|a, b| b.start_date().cmp(&a.start_date()));
    events
}
