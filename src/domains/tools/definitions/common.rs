//! Common utilities shared across the order tools.
//!
//! Every tool call returns one text content item holding pretty-printed
//! JSON: either the domain result, or `{ "error": string }`. Success and
//! failure share the same envelope discipline so callers can always parse
//! the payload the same way.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create a success result carrying the serialized value.
pub fn success_envelope<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_envelope(&format!("failed to serialize result: {}", e)),
    }
}

/// Create an error result with an `{ "error": message }` payload.
pub fn error_envelope(message: &str) -> CallToolResult {
    warn!("{}", message);
    let body = serde_json::json!({ "error": message });
    let text = serde_json::to_string_pretty(&body)
        .unwrap_or_else(|_| format!("{{\"error\": {:?}}}", message));
    CallToolResult::error(vec![Content::text(text)])
}

/// Extract the text payload from a tool result.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        rmcp::model::RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let result = error_envelope("amount must be greater than 0");
        assert!(result.is_error.unwrap_or(false));

        let text = result_text(&result).unwrap();
        let json: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(json["error"], "amount must be greater than 0");
    }

    #[test]
    fn test_success_envelope_is_pretty_printed() {
        let result = success_envelope(&serde_json::json!({ "id": 1 }));
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result).unwrap();
        // Pretty printing puts each field on its own line.
        assert!(text.contains('\n'));
        assert!(text.contains("\"id\": 1"));
    }
}
