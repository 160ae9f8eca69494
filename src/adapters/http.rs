use crate::domain::ports::ElementRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

pub const ISOTOPES_ROUTE: &str = "/api/isotopes/{symbol}";

/// Builds the HTTP surface: a single `GET /api/isotopes/{symbol}` route.
pub fn router<R>(repository: R) -> Router
where
    R: ElementRepository + Clone + 'static,
{
    Router::new()
        .route(ISOTOPES_ROUTE, get(get_element::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

/// Found elements are returned as JSON. An unknown symbol is a normal,
/// empty `204 No Content` response rather than an error.
async fn get_element<R>(State(repository): State<R>, Path(symbol): Path<String>) -> Response
where
    R: ElementRepository + Clone + 'static,
{
    match repository.find_by_symbol(&symbol) {
        Some(element) => {
            tracing::debug!("Found {} ({})", element.name, element.symbol);
            (StatusCode::OK, Json(element)).into_response()
        }
        None => {
            tracing::debug!("No element with symbol {:?}", symbol);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
