//! Typed form payloads submitted by the handler layer.
//!
//! Each form validates into `Result<(), AppError>`; on failure the
//! [`AppError::Validation`] payload carries the messages to re-render.

use crate::constants::{MIN_PASSWORD_CHARS, PERMITTED_EXPIRES_DAYS, SNIPPET_TITLE_MAX_CHARS};
use crate::error::AppError;
use crate::validator::{
    email_rx, matches, max_chars, min_chars, not_blank, permitted_value, ValidationErrors,
    Validator,
};
use serde::Deserialize;

const BLANK: &str = "This field cannot be blank";

/// Fields of the "create snippet" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: u32,
}

impl SnippetCreateForm {
    /// Check the title, content, and expiry window.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] listing each failing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::default();
        v.check_field(not_blank(&self.title), "title", BLANK);
        v.check_field(
            max_chars(&self.title, SNIPPET_TITLE_MAX_CHARS),
            "title",
            "This field cannot be more than 100 characters long",
        );
        v.check_field(not_blank(&self.content), "content", BLANK);
        v.check_field(
            permitted_value(self.expires, &PERMITTED_EXPIRES_DAYS),
            "expires",
            "This field must equal 1, 7 or 365",
        );
        v.into_result()
    }
}

/// Fields of the signup form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserSignupForm {
    /// Check name, email shape, and password length.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] listing each failing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::default();
        v.check_field(not_blank(&self.name), "name", BLANK);
        v.check_field(not_blank(&self.email), "email", BLANK);
        v.check_field(
            matches(&self.email, email_rx()),
            "email",
            "This field must be a valid email address",
        );
        v.check_field(not_blank(&self.password), "password", BLANK);
        v.check_field(
            min_chars(&self.password, MIN_PASSWORD_CHARS),
            "password",
            "This field must be at least 8 characters long",
        );
        v.into_result()
    }

    /// Field error shown when the store rejects the email as taken.
    pub fn duplicate_email_errors() -> ValidationErrors {
        let mut v = Validator::default();
        v.add_field_error("email", "Email address is already in use");
        v.into_errors()
    }
}

/// Fields of the login form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLoginForm {
    pub email: String,
    pub password: String,
}

impl UserLoginForm {
    /// Check that both fields are present and the email is well formed.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] listing each failing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::default();
        v.check_field(not_blank(&self.email), "email", BLANK);
        v.check_field(
            matches(&self.email, email_rx()),
            "email",
            "This field must be a valid email address",
        );
        v.check_field(not_blank(&self.password), "password", BLANK);
        v.into_result()
    }

    /// Form-level error shown when authentication fails, whatever the reason.
    pub fn invalid_credentials_errors() -> ValidationErrors {
        let mut v = Validator::default();
        v.add_non_field_error("Email or password is incorrect");
        v.into_errors()
    }
}
