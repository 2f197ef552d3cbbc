// kiyho/src/validation.rs

//! Login and registration form validation.
//!
//! Validators are pure: they take the submitted field values and return the
//! per-field messages to show. An empty `FormErrors` means the form is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
  Username,
  Email,
  Password,
  ConfirmPassword,
}

impl Field {
  pub fn as_str(&self) -> &'static str {
    match self {
      Field::Username => "username",
      Field::Email => "email",
      Field::Password => "password",
      Field::ConfirmPassword => "confirm-password",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Field → message, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
  fn set(&mut self, field: Field, message: &str) {
    self.0.insert(field, message.to_string());
  }

  pub fn is_valid(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, field: Field) -> Option<&str> {
    self.0.get(&field).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
    self.0.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

impl fmt::Display for FormErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, message) in self.iter() {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{}: {}", field, message)?;
      first = false;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
  pub username: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
}

pub fn is_valid_email(email: &str) -> bool {
  EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
  password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn validate_login(username: &str, password: &str) -> FormErrors {
  let mut errors = FormErrors::default();
  if username.trim().is_empty() {
    errors.set(Field::Username, "Username is required");
  }
  if password.is_empty() {
    errors.set(Field::Password, "Password is required");
  }
  errors
}

pub fn validate_registration(form: &RegistrationForm) -> FormErrors {
  let mut errors = FormErrors::default();

  // Length is checked on the raw value; only the emptiness check trims.
  if form.username.trim().is_empty() {
    errors.set(Field::Username, "Username is required");
  } else if form.username.chars().count() < MIN_USERNAME_LEN {
    errors.set(Field::Username, "Username must be at least 3 characters");
  }

  if form.email.trim().is_empty() {
    errors.set(Field::Email, "Email is required");
  } else if !is_valid_email(&form.email) {
    errors.set(Field::Email, "Please enter a valid email address");
  }

  if form.password.is_empty() {
    errors.set(Field::Password, "Password is required");
  } else if !is_valid_password(&form.password) {
    errors.set(Field::Password, "Password must be at least 6 characters");
  }

  if form.password != form.confirm_password {
    errors.set(Field::ConfirmPassword, "Passwords do not match");
  }

  errors
}
