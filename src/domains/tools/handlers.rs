//! Tool handler abstractions.
//!
//! Every tool implements [`ToolHandler`]: it exposes its own
//! [`FunctionDescriptor`] for discovery and turns a parameter mapping into
//! an echoed result or a [`ToolError`].

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ToolError;
use super::manifest::FunctionDescriptor;

/// Parameters supplied with a single tool call.
///
/// Opal sends calls shaped like `{ "parameters": { ... } }`. Anything else
/// (no body, no `parameters` key, a non-object `parameters`) decodes to an
/// empty mapping and is left to the tool's own validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolInvocationRequest {
    pub parameters: Map<String, Value>,
}

impl ToolInvocationRequest {
    /// Decode the request from an optional JSON body.
    pub fn from_body(body: Option<&Value>) -> Self {
        let parameters = body
            .and_then(|b| b.get("parameters"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self { parameters }
    }
}

/// Outcome of a tool call as sent back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolInvocationResult {
    Ok { received: Value },
    Error { error_message: String },
}

impl From<ToolError> for ToolInvocationResult {
    fn from(err: ToolError) -> Self {
        Self::Error {
            error_message: err.to_string(),
        }
    }
}

/// Trait implemented by every callable tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Static metadata advertised through discovery.
    fn descriptor(&self) -> &FunctionDescriptor;

    /// Name of this tool.
    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// Execute the tool with the given parameters.
    async fn invoke(&self, request: ToolInvocationRequest) -> Result<Value, ToolError>;
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Fetch a parameter only if it is present and truthy.
pub fn truthy_parameter<'a>(parameters: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    parameters.get(name).filter(|v| is_truthy(v))
}

/// Check that every required parameter of `descriptor` is present and truthy.
///
/// The error always names all required parameters.
pub fn require_parameters(
    descriptor: &FunctionDescriptor,
    parameters: &Map<String, Value>,
) -> Result<(), ToolError> {
    let all_present = descriptor
        .required_parameters()
        .all(|name| truthy_parameter(parameters, name).is_some());

    if all_present {
        Ok(())
    } else {
        Err(ToolError::missing_required(descriptor.required_parameters()))
    }
}
