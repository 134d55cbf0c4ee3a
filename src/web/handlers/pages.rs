// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::PageError;
use crate::server::AppState;
use crate::site::view_builder::{build_cards, build_project_page};
use crate::site::{ErrorState, HomeTemplate, ProjectErrorTemplate, ProjectTemplate};

/// Query parameter naming the project on the detail page
pub const PROJECT_ID_PARAM: &str = "id";

fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {}", e)),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Catalog Page
// ============================================================================

pub async fn catalog_page(State(state): State<AppState>) -> Response {
    let template = match state.source.load().await {
        Ok(catalog) => HomeTemplate::with_cards(build_cards(&catalog.projects)),
        Err(e) => {
            tracing::error!("Error loading projects: {}", e);
            HomeTemplate::load_failed()
        }
    };

    render(StatusCode::OK, &template)
}

// ============================================================================
// Detail Page
// ============================================================================

/// First non-empty `id` value, matching how browsers read query parameters
pub fn project_id(params: &[(String, String)]) -> Result<&str, PageError> {
    params
        .iter()
        .find(|(key, _)| key == PROJECT_ID_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|id| !id.is_empty())
        .ok_or(PageError::MissingId)
}

fn error_page(state: ErrorState) -> Response {
    let status = match state {
        ErrorState::MissingId => StatusCode::BAD_REQUEST,
        ErrorState::NotFound => StatusCode::NOT_FOUND,
        ErrorState::LoadFailed => StatusCode::INTERNAL_SERVER_ERROR,
    };
    render(status, &ProjectErrorTemplate::new(state))
}

pub async fn project_page(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let id = match project_id(&params) {
        Ok(id) => id,
        Err(e) => {
            tracing::info!("Project page requested without id: {}", e);
            return error_page(ErrorState::MissingId);
        }
    };

    let catalog = match state.source.load().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Error loading project {}: {}", id, e);
            return error_page(ErrorState::LoadFailed);
        }
    };

    match catalog.find(id) {
        Some(project) => render(StatusCode::OK, &ProjectTemplate::new(build_project_page(project))),
        None => {
            tracing::warn!("{}", PageError::NotFound(id.to_string()));
            error_page(ErrorState::NotFound)
        }
    }
}
