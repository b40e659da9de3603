//! Site HTTP client

use crate::{error::Error, site::SiteProfile};
use async_trait::async_trait;
use std::time::Duration;

/// The site blocks obviously non-browser agents.
static USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
static ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches one decoded document per call
#[async_trait]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<String, Error>;
}

#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    encoding: &'static encoding_rs::Encoding,
}

impl Client {
    /// Creates a new Client for the profile's site
    pub fn new(profile: &SiteProfile) -> Result<Self, Error> {
        let encoding = profile.encoding()?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Client { client, encoding })
    }
}

#[async_trait]
impl Fetch for Client {
    /// Does a single HTTP GET on the URL. No retries; the first failure,
    /// timeout, or non-success status surfaces immediately.
    async fn get(&self, url: &str) -> Result<String, Error> {
        log::debug!("GET {}", url);
        let res = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }

        // The site serves a legacy encoding without declaring it reliably,
        // so the profile's encoding is forced rather than detected.
        let bytes = res.bytes().await?;
        let (body, _, _) = self.encoding.decode(&bytes);
        Ok(body.into_owned())
    }
}
