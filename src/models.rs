//! Project Data Model
//!
//! Typed mirror of the `projects.json` document:
//!
//! ```json
//! { "projects": [ { "id": "...", "title": "...", "readTime": "5 min read",
//!                   "sections": [ { "id": "...", "subsections": [...] } ] } ] }
//! ```
//!
//! Ordering of tags, sections and subsections is display-significant and is
//! preserved exactly as it appears in the document.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::LoadError;

/// Document root: `{ "projects": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    pub projects: Vec<Project>,
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_time: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Top-level content unit (numbered in TOC and body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Trusted HTML fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsections: Option<Vec<Subsection>>,
}

/// Nested content unit (never numbered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ProjectCatalog {
    /// Parse a catalog document
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Look up a project by id. Duplicate ids resolve to the first entry.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Ids appearing more than once, each reported once in first-seen order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for project in &self.projects {
            let id = project.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }

        duplicates
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Section {
    /// Subsections in document order; empty when the field is absent
    pub fn subsections(&self) -> &[Subsection] {
        self.subsections.as_deref().unwrap_or(&[])
    }
}
