//! theme command

use crate::utils::Session;
use clap::Args;
use piaoread::{error::Error, prefs::Theme};

#[derive(Args, Clone, Debug)]
pub struct ThemeCmd {
    /// Theme to set (dark or light); toggles when omitted
    theme: Option<String>,
}

impl ThemeCmd {
    pub async fn execute(&self, session: &mut Session) -> Result<(), Error> {
        let theme = match self.theme.as_deref() {
            Some(value) => value.parse::<Theme>()?,
            None => session.prefs.theme.toggled(),
        };
        session.prefs.theme = theme;
        session.save_prefs()?;
        log::info!("Theme: {}", theme);
        Ok(())
    }
}
