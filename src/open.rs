//! open command

use crate::utils::Session;
use clap::Args;
use piaoread::error::Error;

#[derive(Args, Clone, Debug)]
pub struct Open {
    /// Chapter URL
    url: String,
}

impl Open {
    pub async fn execute(&self, session: &mut Session) -> Result<(), Error> {
        let record = session.open(&self.url).await?;
        log::info!("Title: {}", record.title);
        log::info!("Next: {}", record.next_url.as_deref().unwrap_or("-"));
        log::info!("Previous: {}", record.prev_url.as_deref().unwrap_or("-"));
        Ok(())
    }
}
