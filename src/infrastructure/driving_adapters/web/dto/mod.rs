//! Data Transfer Objects
//!
//! Query strings and form bodies coming in, page view shapes going out.

pub mod driver_form;
pub mod login_form;
pub mod search;
pub mod views;

pub use driver_form::{DriverCreationForm, FieldView, FormErrors};
pub use login_form::{safe_next, LoginForm};
pub use search::{CarSearchQuery, DriverSearchQuery, ManufacturerSearchQuery};
pub use views::{CarView, CurrentUserView, DriverView, ManufacturerView};
