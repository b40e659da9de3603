//! Reader preferences
//!
//! One JSON file holds the theme, the font size, and the bookmark. It is
//! read once at startup and rewritten on every mutation; a missing or
//! damaged file never blocks startup.

use crate::error::Error;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

pub const FONT_SIZE_MIN: f64 = 1.0;
pub const FONT_SIZE_MAX: f64 = 4.0;
const FONT_SIZE_DEFAULT: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(Error::config(format!("unknown theme `{}`", value))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "font_size_default")]
    pub font_size: f64,

    /// Last successfully loaded chapter URL
    #[serde(default)]
    pub last_url: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: Theme::default(),
            font_size: FONT_SIZE_DEFAULT,
            last_url: None,
        }
    }
}

impl Preferences {
    /// Platform preferences file, e.g. `~/.local/share/piaoread/prefs.json`
    pub fn default_path() -> Result<PathBuf, Error> {
        let dirs = ProjectDirs::from("", "", "piaoread")
            .ok_or_else(|| Error::io("no home directory for preferences"))?;
        Ok(dirs.data_dir().join("prefs.json"))
    }

    /// Loads preferences, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<Preferences>(&text) {
                Ok(mut prefs) => {
                    prefs.font_size = clamp_font_size(prefs.font_size);
                    log::info!(
                        "Loaded preferences: theme={}, last_url={:?}",
                        prefs.theme,
                        prefs.last_url
                    );
                    prefs
                }
                Err(e) => {
                    log::warn!("could not parse {}: {}", path.display(), e);
                    Preferences::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no preferences at {}, using defaults", path.display());
                Preferences::default()
            }
            Err(e) => {
                log::warn!("could not read {}: {}", path.display(), e);
                Preferences::default()
            }
        }
    }

    /// Writes preferences. Skipped until a page has been bookmarked, so a
    /// fresh install with only a theme flip leaves no file behind.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if self.last_url.is_none() {
            log::debug!("skipping preferences save, no bookmark yet");
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(self)?)?;
        log::debug!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Records a successful chapter load
    pub fn bookmark(&mut self, url: &str) {
        self.last_url = Some(url.into());
    }

    /// Sets the font size, clamped to the allowed range
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = clamp_font_size(size);
    }
}

fn font_size_default() -> f64 {
    FONT_SIZE_DEFAULT
}

pub fn clamp_font_size(size: f64) -> f64 {
    size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = Preferences::default();
        prefs.theme = Theme::Light;
        prefs.set_font_size(2.5);
        prefs.bookmark("https://www.piaotia.com/html/0/757/11485522.html");
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn save_is_skipped_without_a_bookmark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut prefs = Preferences::default();
        prefs.theme = Theme::Light;
        prefs.save(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("nothing.json"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn unknown_theme_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme":"sepia","font_size":2.0,"last_url":null}"#).unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }

    #[test]
    fn font_size_is_clamped_on_load_and_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(
            &path,
            r#"{"theme":"dark","font_size":9.5,"last_url":"https://example.com/1.html"}"#,
        )
        .unwrap();
        assert_eq!(Preferences::load(&path).font_size, FONT_SIZE_MAX);

        let mut prefs = Preferences::default();
        prefs.set_font_size(0.2);
        assert_eq!(prefs.font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn theme_parses_and_toggles() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
