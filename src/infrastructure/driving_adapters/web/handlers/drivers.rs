//! Driver Handlers
//!
//! The driver list and the driver creation form.

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Form, Router,
};
use serde_json::json;
use validator::Validate;

use crate::domain::gateways::PageView;
use crate::domain::models::driver::Driver;
use crate::infrastructure::driving_adapters::web::dto::{
    CurrentUserView, DriverCreationForm, DriverSearchQuery, DriverView, FormErrors,
};
use crate::infrastructure::driving_adapters::web::middleware::CurrentDriver;
use crate::infrastructure::driving_adapters::web::pages::{redirect_found, render_page};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::{UseCaseError, WebError};

const DRIVER_LIST_PATH: &str = "/drivers/";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(DRIVER_LIST_PATH, get(list_drivers))
        .route("/drivers/create/", get(new_driver_form).post(create_driver))
}

/// GET /drivers/?username=
async fn list_drivers(
    CurrentDriver(user): CurrentDriver,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, WebError> {
    let (filter, search_value) = DriverSearchQuery::from_query(query.as_deref()).into_filter();
    let drivers = state.list_drivers_use_case.execute(&filter).await?;

    let driver_list: Vec<DriverView> = drivers.iter().map(DriverView::from).collect();
    let view = PageView::new(
        "taxi/driver_list.html",
        json!({
            "user": CurrentUserView::from(&user),
            "search_value": search_value,
            "driver_list": driver_list,
        }),
    );

    render_page(&state, StatusCode::OK, view)
}

/// GET /drivers/create/
async fn new_driver_form(
    CurrentDriver(user): CurrentDriver,
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    render_driver_form(
        &state,
        &user,
        &DriverCreationForm::default(),
        &FormErrors::default(),
        StatusCode::OK,
    )
}

/// POST /drivers/create/
///
/// # Responses
///
/// * 302 Found - driver created, redirect to the driver list
/// * 400 Bad Request - form re-rendered with field errors, nothing stored
/// * 302 Found to login - no session
async fn create_driver(
    CurrentDriver(user): CurrentDriver,
    State(state): State<AppState>,
    Form(form): Form<DriverCreationForm>,
) -> Result<Response, WebError> {
    if let Err(errors) = form.validate() {
        tracing::warn!(username = %form.username, "Driver form failed validation");
        let errors = FormErrors::from_validation(&errors);
        return render_driver_form(&state, &user, &form, &errors, StatusCode::BAD_REQUEST);
    }

    match state.create_driver_use_case.execute(form.to_register_data()).await {
        Ok(driver) => {
            tracing::info!(
                driver_id = %driver.id(),
                created_by = %user.id(),
                "Driver created via form"
            );
            Ok(redirect_found(DRIVER_LIST_PATH))
        }
        Err(UseCaseError::Domain(rejection)) => {
            tracing::warn!(username = %form.username, reason = %rejection, "Driver form rejected");
            let errors = FormErrors::from_domain(&rejection);
            render_driver_form(&state, &user, &form, &errors, StatusCode::BAD_REQUEST)
        }
        Err(err) => Err(err.into()),
    }
}

fn render_driver_form(
    state: &AppState,
    user: &Driver,
    form: &DriverCreationForm,
    errors: &FormErrors,
    status: StatusCode,
) -> Result<Response, WebError> {
    let view = PageView::new(
        "taxi/driver_form.html",
        json!({
            "user": CurrentUserView::from(user),
            "fields": form.fields(errors),
            "non_field_errors": errors.non_field(),
        }),
    );

    render_page(state, status, view)
}
