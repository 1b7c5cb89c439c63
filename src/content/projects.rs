use super::LocalizedText;

#[derive(Debug)]
pub struct Project {
    /// URL segment under `/<locale>/projects/`
    pub slug: &'static str,
    pub title: LocalizedText,
    pub summary: LocalizedText,
    pub description: LocalizedText,
    pub tech: &'static [&'static str],
    pub year: u16,
    pub repository: Option<&'static str>,
    /// Listed on the CV page
    pub featured: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "pourrice",
        title: LocalizedText::new("PourRice", "PourRice 食乜好"),
        summary: LocalizedText::new(
            "Restaurant discovery app for Hong Kong with bilingual menus, district filters and offline favourites.",
            "香港餐廳搜尋應用程式，提供雙語餐牌、地區篩選及離線收藏功能。",
        ),
        description: LocalizedText::new(
            "PourRice aggregates open restaurant licence data from the Food and Environmental Hygiene \
             Department and enriches it with user reviews. The mobile client caches favourites for \
             offline use, while a small API service normalises addresses across English and Chinese \
             records so search works in either language.",
            "PourRice 整合食物環境衞生署的公開食肆牌照數據，並加入用戶評價。流動客戶端會離線快取收藏，\
             而後端服務則統一中英文地址記錄，讓兩種語言都能順利搜尋。",
        ),
        tech: &["Flutter", "Firebase", "Node.js", "Algolia"],
        year: 2024,
        repository: Some("https://github.com/kitlam/pourrice"),
        featured: true,
    },
    Project {
        slug: "harbour-telemetry",
        title: LocalizedText::new("Harbour Telemetry", "維港遙測"),
        summary: LocalizedText::new(
            "Live dashboard for ferry positions and pier congestion built on public AIS feeds.",
            "利用公開 AIS 數據製作的渡輪位置及碼頭擠迫程度即時儀表板。",
        ),
        description: LocalizedText::new(
            "A streaming pipeline decodes AIS messages, snaps vessels to known routes and publishes \
             per-pier congestion estimates over WebSockets. The front end renders a vector harbour map \
             that stays smooth with hundreds of moving markers.",
            "串流管線解碼 AIS 訊息，把船隻對應到已知航線，並透過 WebSocket 發佈各碼頭的擠迫估算。\
             前端以向量地圖顯示海港，即使有數百個移動標記亦能保持流暢。",
        ),
        tech: &["Rust", "Tokio", "TypeScript", "MapLibre"],
        year: 2023,
        repository: Some("https://github.com/kitlam/harbour-telemetry"),
        featured: true,
    },
    Project {
        slug: "jyutping-keys",
        title: LocalizedText::new("Jyutping Keys", "粵拼鍵盤"),
        summary: LocalizedText::new(
            "Cantonese input method with frequency-ranked candidates and user dictionaries.",
            "按使用頻率排列候選字並支援自訂詞庫的粵語輸入法。",
        ),
        description: LocalizedText::new(
            "An input method engine that ranks candidates using a corpus of subtitles and forum posts. \
             Users can teach it new phrases, which are stored locally and synced between devices \
             without leaving the phone unencrypted.",
            "輸入法引擎以字幕及討論區語料為候選字排序。用戶可以教它新詞語，詞庫儲存在本機，\
             並以加密方式在裝置之間同步。",
        ),
        tech: &["Kotlin", "SQLite", "Python"],
        year: 2022,
        repository: None,
        featured: false,
    },
    Project {
        slug: "campus-queue",
        title: LocalizedText::new("Campus Queue", "校園排隊通"),
        summary: LocalizedText::new(
            "Virtual queue for university canteens that cut lunchtime waits during exam weeks.",
            "為大學飯堂而設的虛擬排隊系統，縮短考試週的午飯輪候時間。",
        ),
        description: LocalizedText::new(
            "Students join a queue from a QR code, receive a push notification when their order is \
             ready, and canteen staff see a live board of pending tickets. Piloted at two canteens \
             during the 2022 exam period.",
            "學生掃描二維碼加入輪候，餐點準備好時會收到推送通知，飯堂職員則可查看即時訂單板。\
             系統曾於 2022 年考試期間在兩間飯堂試行。",
        ),
        tech: &["React", "Go", "PostgreSQL"],
        year: 2022,
        repository: Some("https://github.com/kitlam/campus-queue"),
        featured: false,
    },
    Project {
        slug: "print-cv",
        title: LocalizedText::new("Printable CV", "可列印履歷"),
        summary: LocalizedText::new(
            "This site: a bilingual résumé that prints cleanly and decorates only where it should.",
            "即本網站：可整齊列印的雙語履歷，只在適當的地方加入裝飾。",
        ),
        description: LocalizedText::new(
            "Server-rendered pages with a deterministic decorative layer. The CV page stays plain for \
             printing, while the gallery and timeline get a retro-futuristic treatment whose layout \
             never shifts between renders.",
            "伺服器渲染的頁面配合可重現的裝飾層。履歷頁保持簡潔以便列印，項目展覽及時間線則加入\
             復古未來風格，而且每次渲染的排版都不會改變。",
        ),
        tech: &["Rust", "axum", "Handlebars"],
        year: 2025,
        repository: None,
        featured: true,
    },
];

pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}
