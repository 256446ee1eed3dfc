use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::FetchError;

/// One remote call a source makes. `label` is whatever the source attaches to
/// records from this endpoint (CodeChef: the category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub label: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Endpoint {
            url: url.into(),
            label: label.into(),
        }
    }
}

pub trait Fetch {
    fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError>;
}

/// Blocking HTTP client with a per-request timeout.
pub struct HttpFetcher {
    client: Client,
    user_agent: Option<String>,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpFetcher {
            client,
            user_agent: user_agent.map(str::to_string),
        })
    }
}

impl Fetch for HttpFetcher {
    fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let mut request = self.client.get(&endpoint.url);
        if let Some(ref ua) = self.user_agent {
            request = request.header(USER_AGENT, ua);
        }
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

pub struct FetchOutcome<'a> {
    pub payloads: Vec<(&'a Endpoint, Value)>,
    pub failures: usize,
}

/// Query every endpoint in order. A failing endpoint is logged and skipped.
pub fn fetch_all<'a>(fetcher: &dyn Fetch, endpoints: &'a [Endpoint]) -> FetchOutcome<'a> {
    let mut payloads = Vec::with_capacity(endpoints.len());
    let mut failures = 0;

    for endpoint in endpoints {
        info!(url = %endpoint.url, label = %endpoint.label, "Fetching");
        match fetcher.get_json(endpoint) {
            Ok(value) => payloads.push((endpoint, value)),
            Err(e) => {
                warn!(url = %endpoint.url, label = %endpoint.label, error = %e, "Endpoint failed, skipping");
                failures += 1;
            }
        }
    }

    FetchOutcome { payloads, failures }
}
