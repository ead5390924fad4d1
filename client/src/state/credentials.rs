//! Transient form state for the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each auth page owns one `RwSignal<Credentials>`. Every keystroke replaces
//! the addressed field with the input's current value; submit handlers read
//! the whole struct once and derive the JSON request body from it. Nothing is
//! validated or normalized here, and nothing is persisted: leaving the page
//! drops the signal.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;

use serde::Serialize;

/// One input field of an auth form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Email,
    Password,
}

/// Values typed into an auth form. `username` is only collected on signup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Replace one field with the latest input value, verbatim.
    pub fn set(&mut self, field: CredentialField, value: String) {
        match field {
            CredentialField::Username => self.username = value,
            CredentialField::Email => self.email = value,
            CredentialField::Password => self.password = value,
        }
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::Username => &self.username,
            CredentialField::Email => &self.email,
            CredentialField::Password => &self.password,
        }
    }

    /// Body for `POST /users/login`.
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Body for `POST /users/register`.
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

// Passwords stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
