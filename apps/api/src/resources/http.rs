//! Remote resource backend. Makes one GET per request; failures are returned
//! to the caller as-is with no retry.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::{ResourceError, ResourceProvider, ResourceQuery, ResourceSet};

#[derive(Clone)]
pub struct HttpResourceProvider {
    client: Client,
    base_url: Url,
}

impl HttpResourceProvider {
    pub fn new(base_url: &str) -> Result<Self, ResourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ResourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }
}

#[async_trait]
impl ResourceProvider for HttpResourceProvider {
    /// GET `{base}?subject=..&level=..`, expecting `{ "resources": [...] }`.
    async fn fetch(&self, query: &ResourceQuery) -> Result<ResourceSet, ResourceError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("subject", &query.subject), ("level", &query.level)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|e| e.to_string());
            return Err(ResourceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let set: ResourceSet = response.json().await?;
        debug!(
            "Resource service returned {} resources for {}",
            set.resources.len(),
            query.subject
        );
        Ok(set)
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}
