//! next command

use crate::utils::Session;
use clap::Args;
use piaoread::error::Error;

#[derive(Args, Clone, Debug)]
pub struct Next {}

impl Next {
    pub async fn execute(&self, session: &mut Session) -> Result<(), Error> {
        let current = session.bookmark()?;
        let record = session.peek(&current).await?;
        match record.next_url.as_deref() {
            Some(url) => {
                let record = session.open(url).await?;
                log::info!("Title: {}", record.title);
            }
            None => log::warn!("no next-chapter link on {}", current),
        }
        Ok(())
    }
}
