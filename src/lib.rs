//! Portfolio Site
//!
//! Renders a static `projects.json` document into HTML:
//! - `models`: typed project / section / subsection data
//! - `site/`: view models, section numbering and Askama templates
//! - `source`: loads the document fresh on every request
//! - `server`: Axum router serving the catalog and detail pages
//!
//! Run with: cargo run --bin portfolio_server

pub mod error;
pub mod models;
pub mod site;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod source;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use error::{LoadError, PageError};
pub use models::{Project, ProjectCatalog, Section, Subsection};

#[cfg(feature = "server")]
pub use config::ServerConfig;
#[cfg(feature = "server")]
pub use server::{create_router, AppState};
#[cfg(feature = "server")]
pub use source::CatalogSource;
