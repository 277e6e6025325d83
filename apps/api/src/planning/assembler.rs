//! Plan Assembler — parse timeframe, generate lines, fetch resources, stamp.
//!
//! Flow: resolve_day_count → generate_plan_for → ResourceProvider::fetch → StudyPlan.
//! Only the resource fetch can fail, and that failure is returned unchanged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::planning::generator::generate_plan_for;
use crate::planning::templates::TemplateCatalog;
use crate::planning::timeframe::{resolve_day_count, Timeframe};
use crate::resources::{Resource, ResourceError, ResourceProvider, ResourceQuery};

/// A generated study plan. Built fresh per request and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub subject: String,
    pub level: String,
    /// `"{total_days} days"`
    pub timeframe: String,
    pub plan: Vec<String>,
    pub resources: Vec<Resource>,
    pub generated_at: DateTime<Utc>,
    pub total_days: u32,
}

#[derive(Clone)]
pub struct PlanAssembler {
    catalog: Arc<TemplateCatalog>,
    resources: Arc<dyn ResourceProvider>,
}

impl PlanAssembler {
    pub fn new(catalog: Arc<TemplateCatalog>, resources: Arc<dyn ResourceProvider>) -> Self {
        Self { catalog, resources }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub async fn build_study_plan(
        &self,
        subject: &str,
        level: &str,
        raw_timeframe: Option<&Timeframe>,
    ) -> Result<StudyPlan, ResourceError> {
        let total_days = resolve_day_count(raw_timeframe, level);
        if !self.catalog.contains(subject, level) {
            debug!("No template for {}/{}, using generic topics", subject, level);
        }
        let plan = generate_plan_for(&self.catalog, subject, level, total_days);

        let query = ResourceQuery {
            subject: subject.to_string(),
            level: level.to_string(),
        };
        let resource_set = self.resources.fetch(&query).await?;

        info!(
            "Built {}-day {} plan for '{}' ({} resources via {})",
            total_days,
            level,
            subject,
            resource_set.resources.len(),
            self.resources.backend()
        );

        Ok(StudyPlan {
            subject: subject.to_string(),
            level: level.to_string(),
            timeframe: format!("{total_days} days"),
            plan,
            resources: resource_set.resources,
            generated_at: Utc::now(),
            total_days,
        })
    }
}
