//! Taxi Fleet Service
//!
//! Server-rendered pages for browsing manufacturers, drivers and cars and
//! for registering drivers, laid out along Clean/Hexagonal Architecture
//! lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
