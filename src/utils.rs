//! shell utilities

use piaoread::{
    chapter::ChapterRecord,
    client::Client,
    error::Error,
    extract::ChapterExtractor,
    prefs::Preferences,
    render,
    site::SiteProfile,
};
use std::{fs, path::PathBuf};

/// One command's worth of shared state: the site profile, the loaded
/// preferences, and where things are read from and written to.
pub struct Session {
    pub prefs: Preferences,
    profile: SiteProfile,
    prefs_path: PathBuf,
    out: PathBuf,
}

impl Session {
    pub fn new(
        profile: Option<&str>,
        prefs_path: Option<&str>,
        out: &str,
    ) -> Result<Self, Error> {
        let profile = match profile {
            Some(file) => SiteProfile::load(file)?,
            None => SiteProfile::default(),
        };
        let prefs_path = match prefs_path {
            Some(path) => PathBuf::from(path),
            None => Preferences::default_path()?,
        };
        let prefs = Preferences::load(&prefs_path);
        Ok(Session {
            prefs,
            profile,
            prefs_path,
            out: out.into(),
        })
    }

    /// Fetches a chapter without rendering or touching the bookmark. Used by
    /// navigation to re-derive the current page's links.
    pub async fn peek(&self, url: &str) -> Result<ChapterRecord, Error> {
        let client = Client::new(&self.profile)?;
        let extractor = ChapterExtractor::new(self.profile.clone());
        piaoread::fetch_chapter(&client, &extractor, url).await
    }

    /// Fetches a chapter, writes the rendered document, and advances the
    /// bookmark. A fetch failure leaves the preferences untouched.
    pub async fn open(&mut self, url: &str) -> Result<ChapterRecord, Error> {
        let record = self.peek(url).await?;

        if record.content.is_sentinel() {
            log::warn!("content extraction failed for {}, keeping title and links", url);
        }

        let document = render::render(&record, self.prefs.theme, self.prefs.font_size);
        fs::write(&self.out, document)?;
        log::info!("Wrote {}", self.out.display());

        self.prefs.bookmark(&record.source_url);
        self.prefs.save(&self.prefs_path)?;
        Ok(record)
    }

    /// The saved bookmark URL
    pub fn bookmark(&self) -> Result<String, Error> {
        self.prefs
            .last_url
            .clone()
            .ok_or_else(|| Error::config("no bookmark saved yet, run `open <url>` first"))
    }

    pub fn save_prefs(&self) -> Result<(), Error> {
        self.prefs.save(&self.prefs_path)
    }
}
