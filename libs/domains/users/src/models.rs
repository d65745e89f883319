use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// 3 to 30 ASCII letters or digits
static PASSWORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,30}$").unwrap());

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !PASSWORD_PATTERN.is_match(password) {
        return Err(ValidationError::new("invalid_password"));
    }
    Ok(())
}

/// Stored account. Created once at registration, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v7)
    pub id: Uuid,
    /// Unique email address
    pub email: String,
    pub username: String,
    /// Argon2 PHC string, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Registration form body.
///
/// Missing fields decode as empty strings and then fail validation.
/// Fields other than these four are rejected at decode time.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterRequest {
    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    #[serde(rename = "confirmationPassword")]
    #[validate(must_match(other = "password"))]
    pub confirmation_password: String,
}

/// Login form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Why a registration was turned away without a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidData,
    EmailInUse,
}

impl Rejection {
    /// Message shown to the user on the registration page
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::InvalidData => "Data is not valid, please try again.",
            Rejection::EmailInUse => "Email is already in use.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(User),
    Rejected(Rejection),
}

/// Require at least two labels after the `@`, so `user@localhost` is rejected.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("");
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() >= 2 && labels.iter().all(|label| !label.is_empty()) {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegisterRequest {
        RegisterRequest {
            email: "a@example.com".to_string(),
            username: "alice".to_string(),
            password: "abc123".to_string(),
            confirmation_password: "abc123".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let input = RegisterRequest {
            confirmation_password: "abc124".to_string(),
            ..valid()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirmation_password"));
    }

    #[test]
    fn test_password_rules() {
        for password in ["ab", &"a".repeat(31), "abc-123", "abc 123", "pässwort"] {
            let input = RegisterRequest {
                password: password.to_string(),
                confirmation_password: password.to_string(),
                ..valid()
            };
            assert!(input.validate().is_err(), "{password:?} should be rejected");
        }

        for password in ["abc", &"A1".repeat(15)] {
            let input = RegisterRequest {
                password: password.to_string(),
                confirmation_password: password.to_string(),
                ..valid()
            };
            assert!(input.validate().is_ok(), "{password:?} should be accepted");
        }
    }

    #[test]
    fn test_email_rules() {
        for email in ["user@localhost", "not-an-email", "a@", "a@example.", ""] {
            let input = RegisterRequest {
                email: email.to_string(),
                ..valid()
            };
            assert!(input.validate().is_err(), "{email:?} should be rejected");
        }
    }

    #[test]
    fn test_empty_username_rejected() {
        let input = RegisterRequest {
            username: String::new(),
            ..valid()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_user_serialization_skips_hash() {
        let user = User::new(
            "a@example.com".to_string(),
            "alice".to_string(),
            "$argon2id$v=19$...".to_string(),
        );
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@example.com");
    }
}
