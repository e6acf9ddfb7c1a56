use std::time::Duration;

use log::debug;
use reqwest::Method;

use crate::data_structs::envelope::Envelope;
use crate::error::ProxyError;
use crate::SharedResources;

/// Fixed per-call budgets; nothing is propagated from the inbound request.
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(15);

/// Authenticated access to the registration portal. One instance is built per
/// inbound request around the shared reqwest client; the token lives no longer
/// than that request.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl PortalClient {
    pub fn new(shared: &SharedResources, token: String) -> PortalClient {
        PortalClient {
            http: shared.http.clone(),
            base_url: shared.portal_base_url.clone(),
            token,
        }
    }

    /// One round trip to the portal. Every wire-level failure (timeout, connect
    /// error, non-2xx, undecodable body) collapses into the generic upstream
    /// error; the cause only reaches the debug log.
    async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        timeout: Duration,
    ) -> Result<Envelope, ProxyError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        let response = self
            .http
            .request(method, &url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                debug!("portal call {} failed: {}", path_and_query, err);
                return Err(ProxyError::Upstream);
            }
        };

        match response.json::<Envelope>().await {
            Ok(envelope) => Ok(envelope),
            Err(err) => {
                debug!("portal call {} returned an undecodable body: {}", path_and_query, err);
                Err(ProxyError::Upstream)
            }
        }
    }

    pub async fn get(&self, path_and_query: &str) -> Result<Envelope, ProxyError> {
        self.request(Method::GET, path_and_query, READ_TIMEOUT).await
    }

    pub async fn post(&self, path_and_query: &str) -> Result<Envelope, ProxyError> {
        self.request(Method::POST, path_and_query, WRITE_TIMEOUT).await
    }

    pub async fn delete(&self, path_and_query: &str) -> Result<Envelope, ProxyError> {
        self.request(Method::DELETE, path_and_query, READ_TIMEOUT).await
    }
}
