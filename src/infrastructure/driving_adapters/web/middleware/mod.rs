//! Web Middleware
//!
//! Session handling and request tagging for the web router.

pub mod request_id;
pub mod session;

pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use session::{CurrentDriver, LoginRedirect, SessionTokens, LOGIN_PATH};
