//! Topic templates — the (subject, level) table the plan generator draws from.
//!
//! The table is a JSON asset loaded once at startup into an immutable
//! `TemplateCatalog`. Lookups that miss fall back to a generic template with
//! the subject name interpolated.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Default table shipped with the binary.
const DEFAULT_TEMPLATES_JSON: &str = include_str!("../../assets/topic_templates.json");

/// Expected number of core topics; one per day of a standard one-week plan.
pub const STANDARD_CORE_LEN: usize = 7;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template {subject}/{level} has no core topics")]
    EmptyCore { subject: String, level: String },
}

/// Ordered topics for one (subject, level) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTemplate {
    pub core: Vec<String>,
    #[serde(default)]
    pub extended: Vec<String>,
}

impl TopicTemplate {
    /// Template used for any (subject, level) pair the catalog does not know.
    pub fn generic(subject: &str) -> Self {
        Self {
            core: vec![
                format!("Introduction to {subject}"),
                "Basic concepts and terminology".to_string(),
                "Hands-on practice and examples".to_string(),
                "Intermediate topics and applications".to_string(),
                "Advanced concepts and problem solving".to_string(),
                "Real-world projects and case studies".to_string(),
                "Review, assessment, and next steps".to_string(),
            ],
            extended: vec![
                format!("Deep dive into {subject} fundamentals"),
                "Advanced techniques and methodologies".to_string(),
                "Industry best practices and standards".to_string(),
                "Complex problem-solving scenarios".to_string(),
                "Integration with other technologies".to_string(),
                "Performance optimization strategies".to_string(),
                "Future trends and emerging concepts".to_string(),
            ],
        }
    }

    /// Core topics followed by extended topics.
    pub fn pool(&self) -> Vec<&str> {
        self.core
            .iter()
            .chain(self.extended.iter())
            .map(String::as_str)
            .collect()
    }
}

/// One subject and the levels the catalog has templates for.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub levels: Vec<String>,
}

/// Immutable subject -> level -> template table.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    subjects: BTreeMap<String, BTreeMap<String, TopicTemplate>>,
}

impl TemplateCatalog {
    /// Loads the embedded default table.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_json(DEFAULT_TEMPLATES_JSON)
    }

    /// Loads a replacement table from disk.
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, TemplateError> {
        let subjects: BTreeMap<String, BTreeMap<String, TopicTemplate>> =
            serde_json::from_str(raw)?;

        let mut template_count = 0usize;
        for (subject, levels) in &subjects {
            for (level, template) in levels {
                if template.core.is_empty() {
                    return Err(TemplateError::EmptyCore {
                        subject: subject.clone(),
                        level: level.clone(),
                    });
                }
                if template.core.len() != STANDARD_CORE_LEN {
                    warn!(
                        "Template {}/{} has {} core topics (expected {})",
                        subject,
                        level,
                        template.core.len(),
                        STANDARD_CORE_LEN
                    );
                }
                template_count += 1;
            }
        }

        info!(
            "Loaded {} topic templates across {} subjects",
            template_count,
            subjects.len()
        );

        Ok(Self { subjects })
    }

    /// Exact-match lookup with an explicit generic fallback.
    pub fn lookup(&self, subject: &str, level: &str) -> Cow<'_, TopicTemplate> {
        match self.subjects.get(subject).and_then(|levels| levels.get(level)) {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(TopicTemplate::generic(subject)),
        }
    }

    pub fn contains(&self, subject: &str, level: &str) -> bool {
        self.subjects
            .get(subject)
            .is_some_and(|levels| levels.contains_key(level))
    }

    /// Subjects in name order, each with its levels in name order.
    pub fn subjects(&self) -> Vec<SubjectSummary> {
        self.subjects
            .iter()
            .map(|(subject, levels)| SubjectSummary {
                subject: subject.clone(),
                levels: levels.keys().cloned().collect(),
            })
            .collect()
    }
}
