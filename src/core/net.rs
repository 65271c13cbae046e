// src/core/net.rs
// One blocking HTTPS GET per call. No retries, no caching.

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::{CalendarError, CalendarResult};

/// Anything that can hand back the raw profile page for a user.
/// The engine only talks to this seam, so tests can serve fixtures.
pub trait PageSource {
    fn fetch(&self, user: &str) -> CalendarResult<String>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, user: &str) -> CalendarResult<String> {
        (**self).fetch(user)
    }
}

/// Live retriever backed by `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct HttpRetriever {
    opts: FetchOptions,
}

impl HttpRetriever {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }
}

impl PageSource for HttpRetriever {
    fn fetch(&self, user: &str) -> CalendarResult<String> {
        let url = self.opts.profile_url(user);
        logd!(%url, "fetching profile page");

        let client = Client::builder()
            .timeout(self.opts.timeout)
            .user_agent(self.opts.user_agent.as_str())
            .build()
            .map_err(|e| CalendarError::transport(user, e))?;

        let resp = client.get(&url).send().map_err(|e| {
            loge!(%url, error = %e, "request failed");
            CalendarError::transport(user, e)
        })?;

        classify_status(user, resp.status())?;
        resp.text().map_err(|e| CalendarError::transport(user, e))
    }
}

/// 404 is the only status that means "no such profile"; anything else
/// outside 2xx is an infrastructure problem.
pub fn classify_status(user: &str, status: StatusCode) -> CalendarResult<()> {
    if status == StatusCode::NOT_FOUND {
        loge!(user, "profile not found");
        return Err(CalendarError::not_found(user));
    }
    if !status.is_success() {
        loge!(user, %status, "unexpected HTTP status");
        return Err(CalendarError::transport(user, format!("HTTP error: {status}")));
    }
    Ok(())
}
