//! resume command

use crate::utils::Session;
use clap::Args;
use piaoread::error::Error;

#[derive(Args, Clone, Debug)]
pub struct Resume {}

impl Resume {
    pub async fn execute(&self, session: &mut Session) -> Result<(), Error> {
        let url = session.bookmark()?;
        log::info!("Resuming {}", url);
        let record = session.open(&url).await?;
        log::info!("Title: {}", record.title);
        Ok(())
    }
}
