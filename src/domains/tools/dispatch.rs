//! Generic tool dispatch.
//!
//! One function executes every [`ToolSpec`] row: assemble the request body
//! from the parameter table, resolve the location, substitute path
//! placeholders, call upstream and shape the response. Per-endpoint code
//! does not exist; endpoints differ only in their table rows.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::core::client::{DataForSeoClient, HttpMethod};
use crate::domains::locations::{LocationResolver, is_already_formatted};

use super::error::ToolError;
use super::registry::{LocationMode, ToolSpec};
use super::response::{self, ResponseMode};
use super::schema::ParamKind;
use super::{filters, ordering};

/// Shared state every tool call needs: the upstream client, the location
/// resolver and the server-wide full response toggle.
pub struct ToolContext {
    pub client: Arc<DataForSeoClient>,
    pub resolver: Arc<LocationResolver>,
    pub full_response: bool,
}

impl ToolContext {
    /// Decide the response mode for a spec, once per call.
    fn mode_for(&self, spec: &ToolSpec) -> ResponseMode {
        if spec.fields.is_none() || self.full_response {
            ResponseMode::Full
        } else {
            ResponseMode::Projected
        }
    }
}

/// Execute one tool call. All failures surface as an error
/// [`CallToolResult`], never as a protocol-level error.
#[instrument(skip(ctx, args), fields(tool = spec.name))]
pub async fn execute(spec: &ToolSpec, ctx: &ToolContext, args: &JsonObject) -> CallToolResult {
    match run(spec, ctx, args).await {
        Ok(shaped) => response::success_result(&shaped),
        Err(error) => response::error_result(&error),
    }
}

async fn run(spec: &ToolSpec, ctx: &ToolContext, args: &JsonObject) -> Result<Value, ToolError> {
    let mut body = build_body(spec, args)?;
    resolve_location(spec, ctx, &mut body).await;
    let path = substitute_path(spec.path, &mut body)?;

    debug!(path = %path, "calling upstream");
    let raw = match spec.method {
        HttpMethod::Post => ctx.client.post(&path, Value::Object(body)).await?,
        HttpMethod::Get => ctx.client.get(&path).await?,
    };

    response::shape(raw, ctx.mode_for(spec), spec.fields.as_deref())
}

/// Assemble the request body from the parameter table. Missing required
/// parameters fail here, before any network traffic.
fn build_body(spec: &ToolSpec, args: &JsonObject) -> Result<Map<String, Value>, ToolError> {
    let mut body = Map::new();

    for param in &spec.params {
        let provided = args.get(param.name).filter(|value| !value.is_null());
        let value = match provided {
            Some(value) => Some(value.clone()),
            None => param.default.clone(),
        };

        let value = match (value, param.required) {
            (Some(value), _) => value,
            (None, true) => return Err(ToolError::missing_parameter(param.name)),
            (None, false) => continue,
        };

        let compiled = match param.kind {
            ParamKind::Filters => filters::compile(Some(&value)),
            ParamKind::OrderBy => ordering::compile(Some(&value)),
            _ => Some(value),
        };
        if let Some(compiled) = compiled {
            body.insert(param.name.to_string(), compiled);
        }
    }

    Ok(body)
}

/// Resolve the `location_name` argument in place according to the spec's
/// location mode. Resolution never fails a call: on any miss the caller's
/// original input is forwarded upstream as-is.
async fn resolve_location(spec: &ToolSpec, ctx: &ToolContext, body: &mut Map<String, Value>) {
    if spec.location == LocationMode::None {
        return;
    }
    let Some(raw) = body.get("location_name").and_then(Value::as_str) else {
        return;
    };
    let raw = raw.to_string();

    let search_engine = body
        .get("search_engine")
        .and_then(Value::as_str)
        .unwrap_or("google")
        .to_string();

    let resolved = match spec.location {
        LocationMode::City => {
            if is_already_formatted(&raw) {
                return;
            }
            ctx.resolver
                .resolve(&raw, &search_engine)
                .await
                .map(|location| location.name)
        }
        LocationMode::Country => ctx.resolver.resolve_to_country(&raw, &search_engine).await,
        LocationMode::None => unreachable!(),
    };

    if let Some(name) = resolved {
        debug!(input = %raw, resolved = %name, "location resolved");
        body.insert("location_name".to_string(), Value::String(name));
    }
}

/// Substitute `{param}` placeholders in the endpoint path from the body,
/// removing the consumed parameters. Path parameters are part of the URL,
/// not the payload.
fn substitute_path(template: &str, body: &mut Map<String, Value>) -> Result<String, ToolError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(end) = rest[start..].find('}') else {
            return Err(ToolError::internal(format!(
                "malformed path template: {template}"
            )));
        };
        path.push_str(&rest[..start]);

        let name = &rest[start + 1..start + end];
        let value = body
            .remove(name)
            .ok_or_else(|| ToolError::missing_parameter(name))?;
        match value {
            Value::String(s) => path.push_str(&s),
            other => path.push_str(&other.to_string()),
        }

        rest = &rest[start + end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}
