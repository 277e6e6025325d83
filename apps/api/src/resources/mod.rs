//! Resource Selector — curated learning links for a subject and level.
//!
//! Default: `CuratedResources` (embedded table, no I/O).
//! Optional: `HttpResourceProvider` (remote service, enabled via config).
//!
//! `AppState` holds an `Arc<dyn ResourceProvider>`, chosen at startup.

pub mod curated;
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use curated::CuratedResources;
pub use http::HttpResourceProvider;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Synthesized search link, always listed first.
    Search,
    Video,
    Article,
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ResourceQuery {
    pub subject: String,
    pub level: String,
}

/// Collaborator response shape: `{ "resources": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSet {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid resource service URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid resource table: {0}")]
    Table(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the resource backend without touching the
/// assembler or handlers.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    async fn fetch(&self, query: &ResourceQuery) -> Result<ResourceSet, ResourceError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
