// src/core/net.rs

// Blocking HTTPS GET through a per-run session (reqwest + cookie jar).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::blocking::Client;

use crate::config::consts::{FALLBACK_USER_AGENT, REQUEST_TIMEOUT_SECS, USER_AGENTS};
use crate::error::ScrapeError;

/// Transport handle for one run: fixed identification string plus cookie
/// state, reused across every fetch in the run. Construction touches no
/// network and never fails.
pub struct Session {
    http: Client,
}

impl Session {
    pub fn new() -> Self {
        let ua = pick_user_agent();
        let http = Client::builder()
            .user_agent(ua)
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                loge!("session builder failed ({e}); using bare client");
                Client::new()
            });
        Session { http }
    }

    /// GET `url` and return the body text. Non-2xx is a transport failure.
    pub fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.http.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotate through the UA pool on the subsecond clock. A clock failure falls
/// back to the fixed string rather than aborting the run.
fn pick_user_agent() -> &'static str {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => USER_AGENTS[d.subsec_nanos() as usize % USER_AGENTS.len()],
        Err(_) => {
            logd!("clock before epoch; using fallback user agent");
            FALLBACK_USER_AGENT
        }
    }
}
