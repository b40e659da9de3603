//! font command

use crate::utils::Session;
use clap::Args;
use piaoread::error::Error;

#[derive(Args, Clone, Debug)]
pub struct Font {
    /// Font size in em units, clamped to 1.0-4.0
    size: f64,
}

impl Font {
    pub async fn execute(&self, session: &mut Session) -> Result<(), Error> {
        session.prefs.set_font_size(self.size);
        session.save_prefs()?;
        log::info!("Font size: {:.1}em", session.prefs.font_size);
        Ok(())
    }
}
