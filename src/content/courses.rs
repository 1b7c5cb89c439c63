use super::LocalizedText;

#[derive(Debug)]
pub struct Course {
    pub code: &'static str,
    pub name: LocalizedText,
}

pub static COURSES: &[Course] = &[
    Course { code: "COMP2119", name: LocalizedText::new("Data Structures and Algorithms", "數據結構與演算法") },
    Course { code: "COMP3230", name: LocalizedText::new("Operating Systems", "作業系統") },
    Course { code: "COMP3234", name: LocalizedText::new("Computer and Communication Networks", "電腦及通訊網絡") },
    Course { code: "COMP3258", name: LocalizedText::new("Functional Programming", "函數式編程") },
    Course { code: "COMP3297", name: LocalizedText::new("Software Engineering", "軟件工程") },
    Course { code: "LING2050", name: LocalizedText::new("Phonetics and Phonology", "語音學及音系學") },
];
