//! Field rules shared by several DTOs

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    /// Tax document: digits only
    static ref DOCUMENT_REGEX: Regex = Regex::new(r"^[0-9]{8,20}$").expect("valid regex");
    /// Catalog codes: upper-case letters, digits, dash and underscore
    static ref CODE_REGEX: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9_-]{0,19}$").expect("valid regex");
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()-]{5,19}$").expect("valid regex");
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

pub fn validate_document(document: &str) -> Result<(), ValidationError> {
    if DOCUMENT_REGEX.is_match(document) {
        Ok(())
    } else {
        Err(rule("document", "document must be 8 to 20 digits"))
    }
}

pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(rule(
            "code",
            "code must be 1 to 20 upper-case letters, digits, '-' or '_'",
        ))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(rule("phone", "phone must be 6 to 20 digits"))
    }
}

/// Menu target: an absolute path or an http(s) URL with a host
pub fn validate_route(url: &str) -> Result<(), ValidationError> {
    if url.starts_with('/') && !url.starts_with("//") {
        return Ok(());
    }

    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        Some(_) => Err(rule("url", "URL must include a valid host")),
        None => Err(rule(
            "url",
            "url must be an absolute path or start with http:// or https://",
        )),
    }
}

/// Rejects strings that are only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rule("blank", "value must not be blank"))
    } else {
        Ok(())
    }
}

/// Id filter where an empty value means "no filter"
pub fn blank_uuid_as_none<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => Uuid::parse_str(raw.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
