//! Redirect probe: follow a URL to its final destination and report whether
//! it lands on a different registrable domain. A transport failure is a
//! distinct outcome — it is never reported as a redirection.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use firstpass_common::{extract_host, registrable_domain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Final URL resolves within the original registrable domain.
    SameDomain,
    /// Final URL resolves to a different registrable domain.
    CrossDomain { final_url: String },
    /// The probe could not complete (timeout, DNS, transport error).
    Unreachable { reason: String },
}

#[async_trait]
pub trait RedirectProbe: Send + Sync {
    async fn resolve(&self, url: &str) -> RedirectOutcome;
}

pub struct HttpRedirectProbe {
    client: reqwest::Client,
}

impl HttpRedirectProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl RedirectProbe for HttpRedirectProbe {
    async fn resolve(&self, url: &str) -> RedirectOutcome {
        let original = registrable_domain(&extract_host(url));

        match self.client.get(url).send().await {
            Ok(resp) => {
                let final_url = resp.url().to_string();
                let landed = registrable_domain(&extract_host(&final_url));
                if landed != original {
                    info!(url, final_url, "URL resolves to a different domain");
                    RedirectOutcome::CrossDomain { final_url }
                } else {
                    RedirectOutcome::SameDomain
                }
            }
            Err(e) => {
                warn!(url, error = %e, "Redirect probe failed");
                RedirectOutcome::Unreachable { reason: e.to_string() }
            }
        }
    }
}
