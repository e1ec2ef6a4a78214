//! Credit response parsing.

use super::error::SmsServiceError;
use crate::types::Credit;
use serde_json::value::RawValue;
use std::collections::HashMap;

/// Field of the `creditvalue` response holding the balance.
pub(crate) const CREDIT_FIELD: &str = "credit";

/// Extract the `credit` field from a `creditvalue` response body.
///
/// The body must be a JSON object. A string value is returned as-is. A
/// numeric value keeps its raw JSON token so no formatting drift happens
/// (`10.00` stays `"10.00"`).
pub(crate) fn parse_credit(body: &str) -> Result<Credit, SmsServiceError> {
    let invalid = |reason: String| SmsServiceError::InvalidCreditResponse {
        reason,
        body: body.to_string(),
    };

    let fields: HashMap<String, Box<RawValue>> =
        serde_json::from_str(body).map_err(|e| invalid(e.to_string()))?;

    let raw = fields
        .get(CREDIT_FIELD)
        .ok_or_else(|| invalid(format!("missing `{CREDIT_FIELD}` field")))?;

    let token = raw.get();
    match token.as_bytes().first().copied() {
        Some(b'"') => serde_json::from_str::<String>(token)
            .map(Credit::from)
            .map_err(|e| invalid(e.to_string())),
        Some(b'-' | b'0'..=b'9') => Ok(Credit::new(token)),
        _ => Err(invalid(format!(
            "expected `{CREDIT_FIELD}` to be a JSON string or number, got {token}"
        ))),
    }
}
