use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::contact::NewContactMessage;

// Same acceptance class the client form enforces: something@something.tld,
// no whitespace. Full RFC 5322 parsing is deliberately not attempted.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One violated field constraint.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// All constraint violations for a rejected submission. Every broken field
/// is reported, not just the first, so the client can surface them together.
#[derive(Debug, Clone, Error)]
#[error("contact submission rejected: {} field(s) invalid", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

/// Validates an untrusted submission payload.
///
/// Succeeds only if `name`, `email`, `subject` and `message` are all present
/// as strings and satisfy their constraints. A missing or non-string field
/// counts as a violation for that field. The returned record carries exactly
/// the four user-supplied fields; anything else in the payload is dropped.
pub fn validate_submission(payload: &Value) -> Result<NewContactMessage, ValidationError> {
    let mut violations = Vec::new();

    let name = text_field(
        payload,
        "name",
        2,
        "Name is required",
        "Name must be at least 2 characters",
        &mut violations,
    );

    let email = match payload.get("email").and_then(Value::as_str) {
        Some(v) if EMAIL_RE.is_match(v) => Some(v),
        Some(_) => {
            violations.push(FieldViolation {
                field: "email",
                message: "Please enter a valid email address",
            });
            None
        }
        None => {
            violations.push(FieldViolation {
                field: "email",
                message: "Email is required",
            });
            None
        }
    };

    let subject = text_field(
        payload,
        "subject",
        5,
        "Subject is required",
        "Subject must be at least 5 characters",
        &mut violations,
    );

    let message = text_field(
        payload,
        "message",
        10,
        "Message is required",
        "Message must be at least 10 characters",
        &mut violations,
    );

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if violations.is_empty() => {
            Ok(NewContactMessage {
                name: name.to_owned(),
                email: email.to_owned(),
                subject: subject.to_owned(),
                message: message.to_owned(),
            })
        }
        _ => Err(ValidationError { violations }),
    }
}

/// Extracts a string field and enforces its minimum length (in characters,
/// not bytes). Pushes a violation and returns `None` on failure.
fn text_field<'a>(
    payload: &'a Value,
    field: &'static str,
    min_len: usize,
    missing: &'static str,
    too_short: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match payload.get(field).and_then(Value::as_str) {
        Some(v) if v.chars().count() >= min_len => Some(v),
        Some(_) => {
            violations.push(FieldViolation {
                field,
                message: too_short,
            });
            None
        }
        None => {
            violations.push(FieldViolation {
                field,
                message: missing,
            });
            None
        }
    }
}
