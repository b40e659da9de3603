//! Site profile
//!
//! The selectors, marker tokens, and encoding the extractor works with are
//! plain data, not code. The compiled-in default targets piaotia.com; a TOML
//! file can override any subset of the fields.

use crate::error::Error;
use config::{File, FileFormat};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct SiteProfile {
    /// Selector for the chapter heading [default: h1]
    #[serde(default = "title_selector_default")]
    title_selector: String,

    /// Selector for the chapter body container [default: #content]
    #[serde(default = "content_selector_default")]
    content_selector: String,

    /// Exact anchor text of the next-chapter link
    #[serde(default = "next_label_default")]
    next_label: String,

    /// Exact anchor text of the previous-chapter link
    #[serde(default = "prev_label_default")]
    prev_label: String,

    /// Literal token the body text starts after in the raw markup
    #[serde(default = "start_marker_default")]
    start_marker: String,

    /// Literal token the body text ends before in the raw markup
    #[serde(default = "end_marker_default")]
    end_marker: String,

    /// Encoding label the site serves its bytes in [default: gbk]
    #[serde(default = "encoding_default")]
    encoding: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        SiteProfile {
            title_selector: title_selector_default(),
            content_selector: content_selector_default(),
            next_label: next_label_default(),
            prev_label: prev_label_default(),
            start_marker: start_marker_default(),
            end_marker: end_marker_default(),
            encoding: encoding_default(),
        }
    }
}

impl SiteProfile {
    /// Loads a profile from a TOML file
    ///
    /// Example:
    ///
    /// title_selector = "h1"
    /// content_selector = "#content"
    /// next_label = "下一章"
    /// prev_label = "上一章"
    /// start_marker = "返回书页"
    /// end_marker = "快捷键"
    /// encoding = "gbk"
    pub fn load(file: &str) -> Result<Self, Error> {
        log::debug!("Using site profile {}", file);
        ::config::Config::builder()
            .add_source(File::new(file, FileFormat::Toml))
            .build()
            .map_err(Error::config)?
            .try_deserialize::<SiteProfile>()
            .map_err(Error::config)
    }

    /// Returns a reference to the title selector
    pub fn title_selector(&self) -> &str {
        self.title_selector.as_str()
    }

    /// Returns a reference to the content container selector
    pub fn content_selector(&self) -> &str {
        self.content_selector.as_str()
    }

    /// Returns a reference to the next-chapter anchor text
    pub fn next_label(&self) -> &str {
        self.next_label.as_str()
    }

    /// Returns a reference to the previous-chapter anchor text
    pub fn prev_label(&self) -> &str {
        self.prev_label.as_str()
    }

    /// Returns a reference to the fallback start marker
    pub fn start_marker(&self) -> &str {
        self.start_marker.as_str()
    }

    /// Returns a reference to the fallback end marker
    pub fn end_marker(&self) -> &str {
        self.end_marker.as_str()
    }

    /// Resolves the encoding label
    pub fn encoding(&self) -> Result<&'static encoding_rs::Encoding, Error> {
        encoding_rs::Encoding::for_label(self.encoding.as_bytes())
            .ok_or_else(|| Error::config(format!("unknown encoding label `{}`", self.encoding)))
    }
}

fn title_selector_default() -> String {
    "h1".into()
}

fn content_selector_default() -> String {
    "#content".into()
}

fn next_label_default() -> String {
    "下一章".into()
}

fn prev_label_default() -> String {
    "上一章".into()
}

fn start_marker_default() -> String {
    "返回书页".into()
}

fn end_marker_default() -> String {
    "快捷键".into()
}

fn encoding_default() -> String {
    "gbk".into()
}
