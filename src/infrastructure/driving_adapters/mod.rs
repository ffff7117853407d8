//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTML web handlers behind a session
//! - Form and query DTOs

pub mod web;
