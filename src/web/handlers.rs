use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{ListingError, Result};
use crate::view::CardView;
use crate::web::state::AppState;
use crate::web::templates::{IndexTemplate, NotificationTemplate, PropertyListTemplate};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let status = match &self {
            ListingError::NotFound(_) => StatusCode::NOT_FOUND,
            ListingError::UnrecognizedCategory(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn render<T: Template>(template: &T) -> Result<Html<String>> {
    Ok(Html(template.render()?))
}

/// HTMX partial requests get fragments; boosted navigation gets the full page
fn wants_fragment(headers: &HeaderMap) -> bool {
    headers.contains_key("HX-Request") && !headers.contains_key("HX-Boosted")
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "stay-listings",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>> {
    let selector = state.selector(query.category.as_deref())?;
    let view = state.view_for(selector);
    render(&IndexTemplate::from_view(&view, None))
}

pub async fn properties_htmx(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
    headers: HeaderMap,
) -> Result<Html<String>> {
    let selector = state.selector(query.category.as_deref())?;
    let view = state.view_for(selector);

    if wants_fragment(&headers) {
        render(&PropertyListTemplate::from_view(&view))
    } else {
        render(&IndexTemplate::from_view(&view, None))
    }
}

pub async fn book(
    State(state): State<AppState>,
    Path(property_id): Path<u32>,
    Query(query): Query<CategoryQuery>,
    headers: HeaderMap,
) -> Result<Html<String>> {
    // Booking keeps the page on whatever category the form was rendered under
    let selector = state.selector(query.category.as_deref())?;
    let view = state.view_for(selector);
    let notification = view.book(property_id);
    debug!("Booking notification: {}", notification);

    if wants_fragment(&headers) {
        render(&NotificationTemplate { notification })
    } else {
        render(&IndexTemplate::from_view(&view, Some(notification)))
    }
}

pub async fn api_properties(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<CardView>>> {
    let selector = state.selector(query.category.as_deref())?;
    let view = state.view_for(selector);
    Ok(Json(view.cards().to_vec()))
}

pub async fn api_property(
    State(state): State<AppState>,
    Path(property_id): Path<u32>,
) -> Result<Json<CardView>> {
    let record = state.catalog.require(property_id)?;
    Ok(Json(CardView::project(record, state.catalog.overrides())))
}
