//! Account Handlers
//!
//! Login and logout. These are the only pages served without a session.

use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::Response,
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::gateways::PageView;
use crate::infrastructure::driving_adapters::web::dto::{safe_next, LoginForm};
use crate::infrastructure::driving_adapters::web::middleware::LOGIN_PATH;
use crate::infrastructure::driving_adapters::web::pages::{redirect_found, render_page};
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::{UseCaseError, WebError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(login))
        .route("/accounts/logout/", get(logout).post(logout))
}

#[derive(Debug, Default, Deserialize)]
struct LoginPageQuery {
    next: Option<String>,
}

/// GET /accounts/login/?next=
async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginPageQuery>,
) -> Result<Response, WebError> {
    render_login(&state, StatusCode::OK, "", query.next.as_deref(), None)
}

/// POST /accounts/login/
///
/// # Responses
///
/// * 302 Found - session cookie set, redirect to `next` or `/`
/// * 401 Unauthorized - login page re-rendered with a generic error
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let driver = match state
        .authenticate_driver_use_case
        .execute(&form.username, &form.password)
        .await
    {
        Ok(driver) => driver,
        Err(UseCaseError::Unauthorized(message)) => {
            return render_login(
                &state,
                StatusCode::UNAUTHORIZED,
                &form.username,
                form.next.as_deref(),
                Some(message.as_str()),
            );
        }
        Err(err) => return Err(err.into()),
    };

    let token = state
        .sessions
        .issue(&driver)
        .map_err(|e| WebError::Internal(anyhow::Error::new(e)))?;

    let target = safe_next(form.next.as_deref());
    tracing::info!(driver_id = %driver.id(), target = %target, "Driver logged in");

    let mut response = redirect_found(target);
    append_cookie(&mut response, &state.sessions.session_cookie(&token))?;
    Ok(response)
}

/// GET|POST /accounts/logout/
async fn logout(State(state): State<AppState>) -> Result<Response, WebError> {
    let mut response = redirect_found(LOGIN_PATH);
    append_cookie(&mut response, &state.sessions.cleared_cookie())?;
    Ok(response)
}

fn append_cookie(response: &mut Response, cookie: &str) -> Result<(), WebError> {
    let value = cookie
        .parse::<HeaderValue>()
        .map_err(|e| WebError::Internal(anyhow::Error::new(e)))?;
    response.headers_mut().append(SET_COOKIE, value);
    Ok(())
}

fn render_login(
    state: &AppState,
    status: StatusCode,
    username: &str,
    next: Option<&str>,
    error: Option<&str>,
) -> Result<Response, WebError> {
    let view = PageView::new(
        "registration/login.html",
        json!({
            "username": username,
            "next": next.unwrap_or_default(),
            "error": error,
        }),
    );

    render_page(state, status, view)
}
