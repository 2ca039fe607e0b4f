use serde::Serialize;

/// What an uploaded file is, decided purely by its extension.
///
/// `Unknown` only ever shows up on failed results; nothing is stored under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FileCategory {
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "CSS")]
    Stylesheet,
    #[serde(rename = "HTML")]
    Markup,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

const EXTENSION_RULES: &[(&str, FileCategory)] = &[
    ("jpg", FileCategory::Image),
    ("jpeg", FileCategory::Image),
    ("png", FileCategory::Image),
    ("gif", FileCategory::Image),
    ("webp", FileCategory::Image),
    ("svg", FileCategory::Image),
    ("ico", FileCategory::Image),
    ("bmp", FileCategory::Image),
    ("css", FileCategory::Stylesheet),
    ("html", FileCategory::Markup),
    ("htm", FileCategory::Markup),
];

impl FileCategory {
    /// Looks up a lowercase extension (no dot). `None` means the upload is rejected.
    pub fn from_extension(extension: &str) -> Option<Self> {
        EXTENSION_RULES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, category)| *category)
    }

    /// Storage subdirectory for this category.
    pub fn folder(self) -> Option<&'static str> {
        match self {
            Self::Image => Some("images"),
            Self::Stylesheet => Some("css"),
            Self::Markup => Some("html"),
            Self::Unknown => None,
        }
    }
}

pub fn allowed_extensions() -> impl Iterator<Item = &'static str> {
    EXTENSION_RULES.iter().map(|(ext, _)| *ext)
}

pub fn allowed_extensions_list() -> String {
    allowed_extensions().collect::<Vec<_>>().join(", ")
}
