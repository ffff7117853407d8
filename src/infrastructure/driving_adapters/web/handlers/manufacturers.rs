//! Manufacturer Handlers

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde_json::json;

use crate::domain::gateways::PageView;
use crate::infrastructure::driving_adapters::web::dto::{
    CurrentUserView, ManufacturerSearchQuery, ManufacturerView,
};
use crate::infrastructure::driving_adapters::web::middleware::CurrentDriver;
use crate::infrastructure::driving_adapters::web::pages::render_page;
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::WebError;

pub fn router() -> Router<AppState> {
    Router::new().route("/manufacturers/", get(list_manufacturers))
}

/// GET /manufacturers/?name=
///
/// Renders `taxi/manufacturer_list.html` with `manufacturer_list` ordered by
/// name, narrowed to names containing `name` (case-insensitive).
async fn list_manufacturers(
    CurrentDriver(user): CurrentDriver,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, WebError> {
    let (filter, search_value) =
        ManufacturerSearchQuery::from_query(query.as_deref()).into_filter();
    let manufacturers = state.list_manufacturers_use_case.execute(&filter).await?;

    let manufacturer_list: Vec<ManufacturerView> =
        manufacturers.iter().map(ManufacturerView::from).collect();
    let view = PageView::new(
        "taxi/manufacturer_list.html",
        json!({
            "user": CurrentUserView::from(&user),
            "search_value": search_value,
            "manufacturer_list": manufacturer_list,
        }),
    );

    render_page(&state, StatusCode::OK, view)
}
