//! Curated resource table — the default `ResourceProvider`.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::{Resource, ResourceError, ResourceKind, ResourceProvider, ResourceQuery, ResourceSet};

const DEFAULT_RESOURCES_JSON: &str = include_str!("../../assets/resources.json");

const SEARCH_BASE_URL: &str = "https://www.youtube.com/results";

/// Per-kind cap applied to a subject's curated list.
pub const MAX_PER_KIND: usize = 2;

/// Kinds taken from the curated list, in output order.
const CURATED_KINDS: [ResourceKind; 3] = [
    ResourceKind::Video,
    ResourceKind::Article,
    ResourceKind::Interactive,
];

pub struct CuratedResources {
    table: HashMap<String, Vec<Resource>>,
}

impl CuratedResources {
    /// Loads the embedded table.
    pub fn builtin() -> Result<Self, ResourceError> {
        Self::from_json(DEFAULT_RESOURCES_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ResourceError> {
        let table: HashMap<String, Vec<Resource>> = serde_json::from_str(raw)?;
        Ok(Self { table })
    }

    /// Search link first, then up to `MAX_PER_KIND` of each curated kind
    /// (video, article, interactive). Unknown subjects get the search link
    /// followed by the general-purpose list.
    pub fn select(&self, subject: &str, level: &str) -> Result<Vec<Resource>, ResourceError> {
        let mut selected = vec![search_link(subject, level)?];

        match self.table.get(subject) {
            Some(curated) => {
                for kind in CURATED_KINDS {
                    selected.extend(
                        curated
                            .iter()
                            .filter(|r| r.kind == kind)
                            .take(MAX_PER_KIND)
                            .cloned(),
                    );
                }
            }
            None => selected.extend(general_resources()),
        }

        Ok(selected)
    }
}

#[async_trait]
impl ResourceProvider for CuratedResources {
    async fn fetch(&self, query: &ResourceQuery) -> Result<ResourceSet, ResourceError> {
        debug!("Selecting curated resources for {}", query.subject);
        let resources = self.select(&query.subject, &query.level)?;
        Ok(ResourceSet { resources })
    }

    fn backend(&self) -> &'static str {
        "curated"
    }
}

fn search_link(subject: &str, level: &str) -> Result<Resource, ResourceError> {
    let query = format!("{subject} {level} tutorial");
    let url = Url::parse_with_params(SEARCH_BASE_URL, &[("search_query", query.as_str())])
        .map_err(|e| ResourceError::InvalidUrl(e.to_string()))?;

    Ok(Resource {
        title: format!("{subject} tutorials for {level} learners"),
        url: url.to_string(),
        kind: ResourceKind::Search,
        description: format!("Video search results for {level} {subject} tutorials."),
    })
}

fn general_resources() -> Vec<Resource> {
    vec![
        Resource {
            title: "Khan Academy - General Resources".to_string(),
            url: "https://www.khanacademy.org".to_string(),
            kind: ResourceKind::Interactive,
            description: "Free lessons and practice across many subjects.".to_string(),
        },
        Resource {
            title: "Coursera - Free Courses".to_string(),
            url: "https://www.coursera.org/courses?query=free".to_string(),
            kind: ResourceKind::Video,
            description: "University-level video courses.".to_string(),
        },
        Resource {
            title: "freeCodeCamp Learn".to_string(),
            url: "https://www.freecodecamp.org/learn".to_string(),
            kind: ResourceKind::Interactive,
            description: "Hands-on curriculum with certifications.".to_string(),
        },
    ]
}
