//! Page Handlers
//!
//! One module per area of the site. Every page except login and logout
//! needs a session.

pub mod accounts;
pub mod cars;
pub mod drivers;
pub mod home;
pub mod manufacturers;
