use anyhow::{anyhow, Context, Result};
use scraper::Selector;
use std::time::Duration;
use url::Url;

pub const DEFAULT_URL: &str = "https://www.nytimes.com";
/// Story headline links on the NY Times front page.
pub const DEFAULT_SELECTOR: &str = "body article > .story-heading > a";
pub const DEFAULT_USER_AGENT: &str = concat!("newsrank/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Where to fetch titles from and how to find them in the page.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: Url,
    /// CSS selector; every matching element's text is one title.
    pub selector: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl FetchConfig {
    pub fn new(url: &str, selector: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid url {url:?}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!("unsupported scheme {:?} in {url}", url.scheme()));
        }
        parse_selector(selector)?;
        Ok(Self {
            url,
            selector: selector.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("default url parses"),
            selector: DEFAULT_SELECTOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector {selector:?}: {e}"))
}
