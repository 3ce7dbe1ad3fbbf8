use serde::{Deserialize, Serialize};

use crate::validate::{
    finish, is_valid_email, is_valid_phone, push_error, require_non_empty, FieldErrors, Validate,
};

const MIN_MESSAGE_LEN: usize = 10;

/// Insert schema for a contact-form submission. The subject is free text at
/// this level; the front end offers a fixed list plus an "Autre" fallback.
#[derive(Debug, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Validate for ContactInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        if !is_valid_email(&self.email) {
            push_error(&mut errors, "email", "must be a valid email address");
        }
        if let Some(phone) = &self.phone {
            if !is_valid_phone(phone) {
                push_error(&mut errors, "phone", "must be a valid phone number");
            }
        }
        require_non_empty(&mut errors, "subject", &self.subject);
        if self.message.chars().count() < MIN_MESSAGE_LEN {
            push_error(
                &mut errors,
                "message",
                format!("must be at least {MIN_MESSAGE_LEN} characters"),
            );
        }
        finish(errors)
    }
}

/// Response for `POST /api/contact`: the storage outcome and, separately,
/// whether the operator notification went out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
    pub email_sent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactInput {
        ContactInput {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: None,
            subject: "Autre".into(),
            message: "Bonjour, ceci est un test.".into(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn rejects_short_message() {
        let mut input = valid_input();
        input.message = "trop court".chars().take(5).collect();
        let errors = input.validate().unwrap_err();
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn rejects_bad_email_and_phone_together() {
        let mut input = valid_input();
        input.email = "pas-un-email".into();
        input.phone = Some("abc".into());
        let errors = input.validate().unwrap_err();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("phone"));
    }

    #[test]
    fn phone_is_optional() {
        let mut input = valid_input();
        input.phone = Some("+33 6 12 34 56 78".into());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        let mut input = valid_input();
        // 10 multi-byte characters: valid even though shorter in bytes per char count.
        input.message = "éèêëàâîïôù".into();
        assert!(input.validate().is_ok());
    }
}
