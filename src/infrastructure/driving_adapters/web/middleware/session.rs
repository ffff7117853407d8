//! Session Middleware
//!
//! Session tokens are HS256 JWTs carried in the session cookie or an
//! `Authorization: Bearer` header. Pages that need a logged-in driver take a
//! `CurrentDriver` argument; a missing, invalid or stale session redirects
//! the browser to the login page.
//!
//! Tokens are stateless. Logout clears the cookie but cannot revoke a token
//! already issued; it stays valid until `exp`, bounded by
//! `session.expires_in_secs`.

use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap, Uri,
    },
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::models::driver::Driver;
use crate::domain::models::DriverId;
use crate::infrastructure::driven_adapters::config::SessionConfig;
use crate::infrastructure::driving_adapters::web::pages::redirect_found;
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::UseCaseError;

/// Path of the login page
pub const LOGIN_PATH: &str = "/accounts/login/";

/// JWT claims of a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Driver id
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks session tokens
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
    cookie_name: String,
}

impl SessionTokens {
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.expires_in_secs,
            cookie_name: config.cookie_name.clone(),
        }
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Issue a token for a driver who just logged in
    ///
    /// # Errors
    ///
    /// Returns the `jsonwebtoken` error if signing fails.
    pub fn issue(&self, driver: &Driver) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(driver, chrono::Utc::now().timestamp())
    }

    fn issue_at(&self, driver: &Driver, issued_at: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = SessionClaims {
            sub: driver.id().to_string(),
            username: driver.username().to_string(),
            iat: issued_at,
            exp: issued_at + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Decode a token, checking signature and expiry
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        // Pin the algorithm so a token cannot pick its own.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .ok()
    }

    /// `Set-Cookie` value carrying a fresh token
    #[must_use]
    pub fn session_cookie(&self, token: &str) -> String {
        format!(
            "{}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
            self.cookie_name, self.ttl_secs
        )
    }

    /// `Set-Cookie` value that removes the session
    #[must_use]
    pub fn cleared_cookie(&self) -> String {
        format!("{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0", self.cookie_name)
    }
}

/// Pull the raw session token from a bearer header or the session cookie
fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));
    if let Some(token) = bearer {
        return Some(token.trim().to_string());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Redirect to the login page, remembering where the browser was going
#[derive(Debug)]
pub struct LoginRedirect {
    next: String,
}

impl LoginRedirect {
    #[must_use]
    pub fn for_uri(uri: &Uri) -> Self {
        let next = uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string());
        Self { next }
    }

    #[must_use]
    pub fn location(&self) -> String {
        match serde_urlencoded::to_string([("next", self.next.as_str())]) {
            Ok(query) => format!("{LOGIN_PATH}?{query}"),
            Err(_) => LOGIN_PATH.to_string(),
        }
    }
}

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        redirect_found(&self.location())
    }
}

/// The logged-in driver making the request
#[derive(Debug, Clone)]
pub struct CurrentDriver(pub Driver);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentDriver {
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let redirect = LoginRedirect::for_uri(&parts.uri);

        let Some(token) = session_token(&parts.headers, state.sessions.cookie_name()) else {
            tracing::debug!(path = %parts.uri.path(), "No session, redirecting to login");
            return Err(redirect);
        };

        let Some(claims) = state.sessions.verify(&token) else {
            tracing::warn!(path = %parts.uri.path(), "Rejected invalid or expired session token");
            return Err(redirect);
        };

        let Ok(driver_id) = DriverId::try_from(claims.sub.as_str()) else {
            tracing::warn!(sub = %claims.sub, "Session token subject is not a driver id");
            return Err(redirect);
        };

        match state.get_driver_by_id_use_case.execute(&driver_id).await {
            Ok(driver) => Ok(CurrentDriver(driver)),
            Err(UseCaseError::NotFound { .. }) => {
                tracing::warn!(driver_id = %driver_id, "Session refers to a missing driver");
                Err(redirect)
            }
            Err(err) => {
                tracing::error!(error = %err, "Could not resolve session driver");
                Err(redirect)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::domain::models::driver::CreateDriverData;

    fn tokens() -> SessionTokens {
        SessionTokens::new(&SessionConfig {
            secret: "unit-test-secret".to_string(),
            expires_in_secs: 3600,
            cookie_name: "sessionid".to_string(),
        })
    }

    fn driver() -> Driver {
        Driver::new(CreateDriverData {
            username: "test".to_string(),
            password_hash: "hash".to_string(),
            first_name: "Test".to_string(),
            last_name: "Driver".to_string(),
            license_number: "TES12345".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn issued_token_verifies() {
        let tokens = tokens();
        let driver = driver();

        let token = tokens.issue(&driver).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, driver.id().to_string());
        assert_eq!(claims.username, "test");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = SessionTokens::new(&SessionConfig {
            secret: "another-secret".to_string(),
            expires_in_secs: 3600,
            cookie_name: "sessionid".to_string(),
        });
        let token = other.issue(&driver()).unwrap();

        assert!(tokens().verify(&token).is_none());
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = tokens();
        let long_ago = chrono::Utc::now().timestamp() - 3600 - 120;
        let token = tokens.issue_at(&driver(), long_ago).unwrap();

        assert!(tokens.verify(&token).is_none());
    }

    #[test]
    fn token_is_read_from_cookie_or_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("csrftoken=abc; sessionid=tok123"));
        assert_eq!(session_token(&headers, "sessionid").as_deref(), Some("tok123"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer bearer456"));
        assert_eq!(session_token(&headers, "sessionid").as_deref(), Some("bearer456"));
    }

    #[test]
    fn cleared_cookie_is_not_a_session() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("sessionid="));
        assert!(session_token(&headers, "sessionid").is_none());
    }

    #[test]
    fn login_redirect_keeps_path_and_query() {
        let uri: Uri = "/cars/?model=Test".parse().unwrap();
        assert_eq!(
            LoginRedirect::for_uri(&uri).location(),
            "/accounts/login/?next=%2Fcars%2F%3Fmodel%3DTest"
        );
    }
}
