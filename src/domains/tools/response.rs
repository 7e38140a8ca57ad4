//! Response shaping for upstream envelopes.
//!
//! Every DataForSEO response arrives in the same envelope:
//! `{ status_code, status_message, tasks: [{ result: [...] , ... }] }`.
//! This module validates the envelope and shapes it in one of two modes:
//!
//! - **Full**: the envelope is returned unchanged after validation. Used for
//!   tools that declare no projection fields and when the server-wide full
//!   response toggle is on.
//! - **Projected**: `tasks[0].result` is extracted and each item is reduced
//!   to the dotted field paths the tool declares, keeping responses within a
//!   model-context budget. Paths that reach into an array of objects map
//!   over the elements; paths that do not exist are silently omitted.
//!
//! Failures of any kind become a [`ToolError`] here; the dispatcher converts
//! that into an error `CallToolResult`, never a propagated error.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Map, Value};
use tracing::warn;

use super::error::ToolError;

/// Upstream status code signalling success.
pub const SUCCESS_STATUS: i64 = 20000;

/// How a response should be shaped before it is returned to the caller.
///
/// Decided once per call from the tool's field declaration and the global
/// toggle, then threaded through explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Validate and return the whole envelope.
    Full,
    /// Extract `tasks[0].result` and project each item down to the declared
    /// field paths.
    Projected,
}

/// Validate the envelope status code and require at least one task.
fn check_envelope(raw: &Value) -> Result<(), ToolError> {
    let status_code = raw
        .get("status_code")
        .and_then(Value::as_i64)
        .ok_or(ToolError::EmptyResult)?;

    if status_code != SUCCESS_STATUS {
        let message = raw
            .get("status_message")
            .and_then(Value::as_str)
            .unwrap_or("unknown upstream failure")
            .to_string();
        return Err(ToolError::Upstream {
            status_code,
            message,
        });
    }

    raw.get("tasks")
        .and_then(Value::as_array)
        .filter(|tasks| !tasks.is_empty())
        .map(|_| ())
        .ok_or(ToolError::EmptyResult)
}

/// Extract the non-empty `tasks[0].result` list.
fn task_result(raw: &Value) -> Result<&Vec<Value>, ToolError> {
    raw.get("tasks")
        .and_then(Value::as_array)
        .and_then(|tasks| tasks.first())
        .and_then(|task| task.get("result"))
        .and_then(Value::as_array)
        .filter(|result| !result.is_empty())
        .ok_or(ToolError::EmptyResult)
}

/// Shape a validated upstream envelope according to the response mode.
///
/// Full mode requires a success status and at least one task; a non-empty
/// `result` list is only required when projecting, since some envelopes,
/// such as task creation responses, legitimately carry a null `result`.
pub fn shape(raw: Value, mode: ResponseMode, fields: Option<&[&str]>) -> Result<Value, ToolError> {
    check_envelope(&raw)?;

    match (mode, fields) {
        (ResponseMode::Full, _) | (ResponseMode::Projected, None) => Ok(raw),
        (ResponseMode::Projected, Some(paths)) => {
            let items: Vec<Value> = task_result(&raw)?
                .iter()
                .map(|item| project(item, paths))
                .collect();
            Ok(Value::Array(items))
        }
    }
}

/// Project an item down to the given dotted field paths.
///
/// Paths sharing a head segment merge into one field in the output. A path
/// segment that lands on an array of objects maps the rest of the path over
/// each element. Non-existent paths are omitted without error.
pub fn project(item: &Value, paths: &[&str]) -> Value {
    let Some(source) = item.as_object() else {
        return Value::Object(Map::new());
    };

    // Group paths by head segment, preserving declaration order.
    let mut groups: Vec<(&str, Vec<Option<&str>>)> = Vec::new();
    for path in paths {
        let (head, tail) = match path.split_once('.') {
            Some((head, tail)) => (head, Some(tail)),
            None => (*path, None),
        };
        match groups.iter_mut().find(|(h, _)| *h == head) {
            Some((_, tails)) => tails.push(tail),
            None => groups.push((head, vec![tail])),
        }
    }

    let mut out = Map::new();
    for (head, tails) in groups {
        let Some(value) = source.get(head) else {
            continue;
        };

        // A bare path selects the whole field, subsuming deeper siblings.
        if tails.iter().any(Option::is_none) {
            out.insert(head.to_string(), value.clone());
            continue;
        }

        let subpaths: Vec<&str> = tails.into_iter().flatten().collect();
        let projected = match value {
            Value::Array(elements) => Value::Array(
                elements
                    .iter()
                    .map(|element| project(element, &subpaths))
                    .collect(),
            ),
            Value::Object(_) => project(value, &subpaths),
            // Scalar with a remaining path: nothing to extract.
            _ => continue,
        };
        out.insert(head.to_string(), projected);
    }

    Value::Object(out)
}

/// Render a shaped response as a success result.
pub fn success_result(shaped: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(shaped).unwrap_or_else(|_| shaped.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Render any tool failure as an error result.
pub fn error_result(error: &ToolError) -> CallToolResult {
    let message = error.to_string();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(result: Value) -> Value {
        json!({
            "status_code": SUCCESS_STATUS,
            "status_message": "Ok.",
            "tasks": [{ "result": result, "cost": 0.003 }]
        })
    }

    #[test]
    fn test_full_mode_returns_envelope_unchanged() {
        let raw = envelope(json!([{ "items": [] }]));
        let shaped = shape(raw.clone(), ResponseMode::Full, Some(&["items"])).unwrap();
        assert_eq!(shaped, raw);
    }

    #[test]
    fn test_projected_mode_extracts_items() {
        let raw = envelope(json!([{ "se_domain": "google.com", "check_url": "https://..." }]));
        let shaped = shape(raw, ResponseMode::Projected, Some(&["se_domain"])).unwrap();
        assert_eq!(shaped, json!([{ "se_domain": "google.com" }]));
    }

    #[test]
    fn test_projected_without_fields_falls_back_to_full() {
        let raw = envelope(json!([{ "a": 1 }]));
        let shaped = shape(raw.clone(), ResponseMode::Projected, None).unwrap();
        assert_eq!(shaped, raw);
    }

    #[test]
    fn test_non_success_status_is_upstream_error() {
        let raw = json!({ "status_code": 40101, "status_message": "Auth error.", "tasks": [] });
        let err = shape(raw, ResponseMode::Full, None).unwrap_err();
        match err {
            ToolError::Upstream {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 40101);
                assert_eq!(message, "Auth error.");
            }
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_result_is_error_when_projecting() {
        let raw = envelope(json!([]));
        assert!(matches!(
            shape(raw, ResponseMode::Projected, Some(&["items"])),
            Err(ToolError::EmptyResult)
        ));
        let raw = json!({ "status_code": SUCCESS_STATUS, "tasks": [] });
        assert!(matches!(
            shape(raw, ResponseMode::Projected, Some(&["items"])),
            Err(ToolError::EmptyResult)
        ));
    }

    #[test]
    fn test_full_mode_accepts_null_result() {
        // Task creation envelopes carry the task id outside `result`.
        let raw = json!({
            "status_code": SUCCESS_STATUS,
            "tasks": [{ "id": "07281559-0695-0216-0000-c269be8b7592", "result": null }]
        });
        let shaped = shape(raw.clone(), ResponseMode::Full, None).unwrap();
        assert_eq!(shaped, raw);
    }

    #[test]
    fn test_project_into_nested_array() {
        let item = json!({
            "items": [
                { "rank_absolute": 1, "title": "x" },
                { "rank_absolute": 2, "title": "y" }
            ]
        });
        let projected = project(&item, &["items.rank_absolute"]);
        assert_eq!(
            projected,
            json!({ "items": [{ "rank_absolute": 1 }, { "rank_absolute": 2 }] })
        );
    }

    #[test]
    fn test_project_merges_paths_with_shared_head() {
        let item = json!({
            "items": [{ "rank_absolute": 1, "title": "x", "etv": 1.5 }]
        });
        let projected = project(&item, &["items.rank_absolute", "items.title"]);
        assert_eq!(
            projected,
            json!({ "items": [{ "rank_absolute": 1, "title": "x" }] })
        );
    }

    #[test]
    fn test_project_omits_missing_paths() {
        let item = json!({ "a": 1 });
        let projected = project(&item, &["a", "missing", "a.deeper"]);
        assert_eq!(projected, json!({ "a": 1 }));
    }

    #[test]
    fn test_project_deep_path_through_objects() {
        let item = json!({
            "items": [{
                "keyword_data": { "keyword_info": { "search_volume": 900, "cpc": 1.2 } }
            }]
        });
        let projected = project(&item, &["items.keyword_data.keyword_info.search_volume"]);
        assert_eq!(
            projected,
            json!({
                "items": [{
                    "keyword_data": { "keyword_info": { "search_volume": 900 } }
                }]
            })
        );
    }
}
