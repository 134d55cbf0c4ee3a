//! Site Rendering
//!
//! Turns a `ProjectCatalog` into the catalog and detail pages:
//! - `view_models`: pre-formatted data for templates
//! - `view_builder`: model -> view model conversion (section numbering, links)
//! - `templates`: Askama page templates

pub mod view_models;
pub mod view_builder;
pub mod templates;

pub use templates::{HomeTemplate, ProjectErrorTemplate, ProjectTemplate};
pub use view_builder::{build_cards, build_project_page, numbered_title, section_number};
pub use view_models::{ErrorState, ProjectPageData};
