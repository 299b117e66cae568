//! Paged scraping loop against the cookie-gated key source

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::header::{COOKIE, USER_AGENT};
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::{ScraperError, ScraperResult};
use crate::extract::KeyExtractor;

/// Browser User-Agent sent with every page request; the source rejects
/// obviously non-browser clients
const PAGE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-page request timeout
const PAGE_TIMEOUT: Duration = Duration::from_secs(20);

/// Consecutive pages without a key match before the loop assumes the end
const MAX_CONSECUTIVE_EMPTY_PAGES: u32 = 3;

/// Cookie-session scraper over the paginated key source
pub struct PageScraper {
    client: reqwest::Client,
    config: ScraperConfig,
    extractor: KeyExtractor,
}

impl PageScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            extractor: KeyExtractor::new(),
        }
    }

    /// Walk result pages until keys stop appearing, accumulating unique keys
    /// into `found`. Keys gathered before a failure stay in `found` even when
    /// the walk errors out, so partial harvests are never lost.
    pub async fn harvest(&self, found: &mut BTreeSet<String>) -> ScraperResult<()> {
        let mut page: u32 = 1;
        let mut consecutive_empty: u32 = 0;

        loop {
            if consecutive_empty >= MAX_CONSECUTIVE_EMPTY_PAGES {
                info!(
                    "{MAX_CONSECUTIVE_EMPTY_PAGES} consecutive pages without keys, assuming the last page was reached"
                );
                return Ok(());
            }

            info!("fetching page {page}");
            let page_param = page.to_string();
            let response = self
                .client
                .get(&self.config.base_url)
                .query(&[("status", "200"), ("page", page_param.as_str())])
                .header(COOKIE, self.config.cookie_header())
                .header(USER_AGENT, PAGE_USER_AGENT)
                .timeout(PAGE_TIMEOUT)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                warn!("page {page} returned HTTP {status}, skipping");
                consecutive_empty += 1;
                page += 1;
                continue;
            }

            let body = response.text().await?;

            if page == 1 && !body.contains(&self.config.login_marker) {
                return Err(ScraperError::LoginFailed {
                    marker: self.config.login_marker.clone(),
                });
            }

            let page_keys = self.extractor.extract(&body);
            if page_keys.is_empty() {
                info!("no keys on page {page}");
                consecutive_empty += 1;
            } else {
                let known = found.len();
                let on_page = page_keys.len();
                found.extend(page_keys);
                info!(
                    "found {on_page} keys on page {page} ({} new)",
                    found.len() - known
                );
                consecutive_empty = 0;
            }

            page += 1;
        }
    }
}
