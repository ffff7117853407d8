//! Car Handlers

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde_json::json;

use crate::domain::gateways::PageView;
use crate::infrastructure::driving_adapters::web::dto::{CarSearchQuery, CarView, CurrentUserView};
use crate::infrastructure::driving_adapters::web::middleware::CurrentDriver;
use crate::infrastructure::driving_adapters::web::pages::render_page;
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::WebError;

pub fn router() -> Router<AppState> {
    Router::new().route("/cars/", get(list_cars))
}

/// GET /cars/?model=
async fn list_cars(
    CurrentDriver(user): CurrentDriver,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, WebError> {
    let (filter, search_value) = CarSearchQuery::from_query(query.as_deref()).into_filter();
    let cars = state.list_cars_use_case.execute(&filter).await?;

    let car_list: Vec<CarView> = cars.iter().map(CarView::from).collect();
    let view = PageView::new(
        "taxi/car_list.html",
        json!({
            "user": CurrentUserView::from(&user),
            "search_value": search_value,
            "car_list": car_list,
        }),
    );

    render_page(&state, StatusCode::OK, view)
}
