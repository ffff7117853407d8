//! Page Responses
//!
//! Every HTML response carries the `PageView` it was rendered from as a
//! response extension, so callers in-process can inspect the template and
//! context without parsing markup.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
};

use super::AppState;
use crate::domain::gateways::PageView;
use crate::shared::errors::WebError;

/// Render a page with the given status
///
/// # Errors
///
/// Returns `WebError::Render` if the template fails to render.
pub fn render_page(state: &AppState, status: StatusCode, view: PageView) -> Result<Response, WebError> {
    let html = state.renderer.render(&view)?;
    let mut response = (status, Html(html)).into_response();
    response.extensions_mut().insert(view);
    Ok(response)
}

/// `302 Found` to a local path
#[must_use]
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
