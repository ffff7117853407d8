//! Home Page Handler

use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use serde_json::json;

use crate::domain::gateways::PageView;
use crate::infrastructure::driving_adapters::web::dto::CurrentUserView;
use crate::infrastructure::driving_adapters::web::middleware::CurrentDriver;
use crate::infrastructure::driving_adapters::web::pages::render_page;
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::WebError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - record counts
async fn index(
    CurrentDriver(user): CurrentDriver,
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let summary = state.fleet_summary_use_case.execute().await?;

    let view = PageView::new(
        "taxi/index.html",
        json!({
            "user": CurrentUserView::from(&user),
            "num_manufacturers": summary.manufacturers,
            "num_drivers": summary.drivers,
            "num_cars": summary.cars,
        }),
    );

    render_page(&state, StatusCode::OK, view)
}
