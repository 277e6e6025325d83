use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::planning::assembler::PlanAssembler;
use crate::planning::templates::TemplateCatalog;
use crate::resources::{CuratedResources, HttpResourceProvider, ResourceProvider};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub assembler: PlanAssembler,
}

impl AppState {
    /// Loads the template catalog and picks the resource backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.topic_templates_path {
            Some(path) => {
                info!("Loading topic templates from {}", path.display());
                TemplateCatalog::from_path(path)?
            }
            None => TemplateCatalog::builtin()?,
        };

        let resources: Arc<dyn ResourceProvider> = match &config.resource_service_url {
            Some(url) => Arc::new(
                HttpResourceProvider::new(url).context("RESOURCE_SERVICE_URL is invalid")?,
            ),
            None => Arc::new(CuratedResources::builtin()?),
        };
        info!("Resource backend: {}", resources.backend());

        Ok(Self {
            assembler: PlanAssembler::new(Arc::new(catalog), resources),
        })
    }
}
