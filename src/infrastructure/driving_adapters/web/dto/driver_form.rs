//! Driver Creation Form
//!
//! The urlencoded body of `POST /drivers/create/`, its validation rules and
//! the field list the form template renders.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::application::use_cases::RegisterDriverData;
use crate::shared::errors::DomainError;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").expect("valid regex");
    static ref LICENSE_PREFIX_REGEX: Regex = Regex::new(r"^[A-Z]{3}").expect("valid regex");
    static ref LICENSE_SUFFIX_REGEX: Regex = Regex::new(r"[0-9]{5}$").expect("valid regex");
}

const LICENSE_NUMBER_LEN: usize = 8;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(invalid("required", "This field is required."))
    } else {
        Ok(())
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    validate_required(username)?;
    if USERNAME_REGEX.is_match(username) {
        Ok(())
    } else {
        Err(invalid(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ))
    }
}

fn validate_license_number(license_number: &str) -> Result<(), ValidationError> {
    validate_required(license_number)?;
    if license_number.chars().count() != LICENSE_NUMBER_LEN {
        return Err(invalid(
            "license_number_length",
            "License number should consist of 8 characters",
        ));
    }
    if !LICENSE_PREFIX_REGEX.is_match(license_number) {
        return Err(invalid(
            "license_number_prefix",
            "First 3 characters should be uppercase letters",
        ));
    }
    if !LICENSE_SUFFIX_REGEX.is_match(license_number) {
        return Err(invalid(
            "license_number_suffix",
            "Last 5 characters should be digits",
        ));
    }
    Ok(())
}

/// Form body for creating a driver
///
/// Every field defaults to empty so a missing field is reported as a
/// validation error rather than a rejected request. The whole form is wiped
/// on drop since it holds both password fields.
#[derive(Default, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct DriverCreationForm {
    #[serde(default)]
    #[validate(
        length(max = 150, message = "Ensure this value has at most 150 characters."),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password1: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        must_match(other = "password1", message = "The two password fields didn't match.")
    )]
    pub password2: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Ensure this value has at most 150 characters."))]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_license_number"))]
    pub license_number: String,
}

impl std::fmt::Debug for DriverCreationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverCreationForm")
            .field("username", &self.username)
            .field("password1", &"<redacted>")
            .field("password2", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("license_number", &self.license_number)
            .finish()
    }
}

impl DriverCreationForm {
    /// Registration input for the create-driver use case
    #[must_use]
    pub fn to_register_data(&self) -> RegisterDriverData {
        RegisterDriverData {
            username: self.username.clone(),
            password: Zeroizing::new(self.password1.clone()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            license_number: self.license_number.clone(),
        }
    }

    /// Fields in display order. Password inputs are never echoed back.
    #[must_use]
    pub fn fields(&self, errors: &FormErrors) -> Vec<FieldView> {
        let field = |name: &'static str, label: &'static str, input_type: &'static str, value: &str| {
            FieldView {
                name,
                label,
                input_type,
                value: value.to_string(),
                errors: errors.field(name).to_vec(),
            }
        };

        vec![
            field("username", "Username", "text", &self.username),
            field("password1", "Password", "password", ""),
            field("password2", "Password confirmation", "password", ""),
            field("first_name", "First name", "text", &self.first_name),
            field("last_name", "Last name", "text", &self.last_name),
            field("license_number", "License number", "text", &self.license_number),
        ]
    }
}

/// One input of the rendered form
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub errors: Vec<String>,
}

/// Error messages keyed by form field
#[derive(Debug, Default)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
    non_field: Vec<String>,
}

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_string()).or_default().push(message.into());
    }

    #[must_use]
    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn non_field(&self) -> &[String] {
        &self.non_field
    }

    /// Convert validator output into per-field messages
    #[must_use]
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut form_errors = Self::default();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                form_errors.add(&field, message);
            }
        }
        form_errors
    }

    /// Attach a business rule rejection to the field it concerns
    #[must_use]
    pub fn from_domain(error: &DomainError) -> Self {
        let mut form_errors = Self::default();
        match error {
            DomainError::UsernameTaken(_) => {
                form_errors.add("username", "A user with that username already exists.");
            }
            DomainError::LicenseNumberTaken(_) => {
                form_errors.add("license_number", "A driver with that license number already exists.");
            }
            DomainError::WeakPassword(problems) => {
                for problem in problems {
                    form_errors.add("password2", problem.clone());
                }
            }
            DomainError::InvalidState(message) => form_errors.non_field.push(message.clone()),
        }
        form_errors
    }
}
