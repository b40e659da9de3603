//! Chapter structures

/// Title used when no heading matches the profile selector
pub static TITLE_PLACEHOLDER: &str = "Title Not Found";

/// Body used when every content strategy came up empty
pub static EXTRACTION_FAILED: &str = "[content extraction failed]";

/// Chapter body, in one of the two forms the extractor produces.
///
/// The selector strategy keeps the container's inner markup; the marker
/// fallback only recovers plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Html(String),
    Text(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Html(s) | Content::Text(s) => s.as_str(),
        }
    }

    /// True when the body is the extraction-failed sentinel
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Content::Text(s) if s == EXTRACTION_FAILED)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterRecord {
    pub title: String,
    pub content: Content,

    /// Absolute next-chapter URL, when the page links one
    pub next_url: Option<String>,

    /// Absolute previous-chapter URL, when the page links one
    pub prev_url: Option<String>,

    /// The URL the chapter was fetched from. The extractor leaves this
    /// empty; the pipeline attaches it.
    pub source_url: String,
}
