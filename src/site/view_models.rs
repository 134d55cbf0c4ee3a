//! View Models for Site Pages
//!
//! Pre-formatted data handed to the Askama templates. Numbering, link
//! building and placeholder URLs are all resolved before rendering so the
//! templates stay free of logic.

use serde::Serialize;

/// Image plus the placeholder swapped in when it fails to load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub fallback_src: String,
}

impl ImageView {
    /// Inline `onerror` handler. Clears itself first so a failing placeholder
    /// cannot retrigger it.
    pub fn onerror(&self) -> String {
        format!("this.onerror=null;this.src='{}'", self.fallback_src)
    }
}

// ============================================================================
// Catalog Page
// ============================================================================

/// One card in the catalog grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub href: String,
    pub image: ImageView,
    pub tags: Vec<String>,
    pub read_time: String,
    pub title: String,
    pub description: String,
}

// ============================================================================
// Detail Page
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHeader {
    pub image: ImageView,
    pub tags: Vec<String>,
    pub title: String,
    pub read_time: String,
    pub description: String,
}

/// Top-level TOC link, e.g. "01. Architecture"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub anchor: String,
    pub label: String,
    pub children: Vec<TocChild>,
}

/// Nested TOC link (plain title, no number)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocChild {
    pub anchor: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSection {
    pub anchor: String,
    pub heading: String,
    /// Trusted HTML, empty when the section has no content
    pub content: String,
    pub subsections: Vec<ArticleSubsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSubsection {
    pub anchor: String,
    pub title: String,
    pub content: String,
}

/// Everything the detail page renders for a resolved project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPageData {
    pub page_title: String,
    pub header: ProjectHeader,
    pub toc: Vec<TocEntry>,
    pub article: Vec<ArticleSection>,
}

/// The three ways a detail page can fail to show a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorState {
    MissingId,
    NotFound,
    LoadFailed,
}

impl ErrorState {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorState::MissingId => "No project specified",
            ErrorState::NotFound => "Project not found",
            ErrorState::LoadFailed => "Failed to load project details",
        }
    }
}
