use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Field name -> list of human-readable problems with that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Schema-level validation, applied by the route layer before storage is invoked.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    // Loose international phone pattern: optional +, then digits with common separators.
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 ().\-]{4,19}$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn push_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors.entry(field.to_string()).or_default().push(message.into());
}

/// Required string field: must contain something other than whitespace.
pub fn require_non_empty(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        push_error(errors, field, "must not be empty");
    }
}

/// Patch variant: the field may be absent, but a supplied value must be non-empty.
pub fn check_filled(errors: &mut FieldErrors, field: &str, value: &Option<String>) {
    if let Some(value) = value {
        require_non_empty(errors, field, value);
    }
}

pub fn finish(errors: FieldErrors) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
