//! Input validation shared by the event, attendee and invitation domains.
//!
//! Every check runs before any write and reports the offending field.

use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use super::error::{CoreError, CoreResult};

pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_MESSAGE_LENGTH: usize = 500;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// Checks the `local@domain.tld` shape and the RFC 5321 length limit.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Validates and normalizes (trims) an email address.
pub fn validate_email(field: &'static str, email: &str) -> CoreResult<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "email is required"));
    }
    if !is_valid_email(trimmed) {
        return Err(CoreError::validation(field, "invalid email format"));
    }
    Ok(trimmed.to_string())
}

/// Returns the trimmed value, or a validation error when it is blank.
pub fn require_text(field: &'static str, value: &str) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Empty means "not provided".
pub fn optional_message(message: Option<&str>) -> CoreResult<Option<String>> {
    match message {
        None => Ok(None),
        Some(m) if m.is_empty() => Ok(None),
        Some(m) if m.chars().count() > MAX_MESSAGE_LENGTH => Err(CoreError::validation(
            "message",
            format!("must not exceed {} characters", MAX_MESSAGE_LENGTH),
        )),
        Some(m) => Ok(Some(m.to_string())),
    }
}

pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| CoreError::validation("date", format!("expected YYYY-MM-DD ({})", e)))
}

pub fn parse_time(value: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|e| CoreError::validation("time", format!("expected HH:MM:SS ({})", e)))
}
