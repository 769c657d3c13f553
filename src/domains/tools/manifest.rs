//! Discovery manifest types.
//!
//! These types describe the callable functions this server advertises to an
//! Opal orchestrator. They are built once at startup and never mutated.

use serde::Serialize;

/// Top-level discovery document: `{ "functions": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryManifest {
    pub functions: Vec<FunctionDescriptor>,
}

/// Metadata describing one invocable function.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDescriptor {
    /// Function identifier used by the orchestrator.
    pub name: String,

    /// Human-readable description shown to the orchestrator.
    pub description: String,

    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSpec>,

    /// Path the function is invoked on.
    pub endpoint: String,

    /// Authentication requirements (always empty for now).
    pub auth_requirements: Vec<String>,

    /// HTTP method used for invocation.
    pub http_method: HttpMethod,
}

/// A single declared parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: ParameterType,

    pub description: String,

    pub required: bool,
}

/// Declared parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
}

/// HTTP method a function is invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl ParameterSpec {
    /// A required string parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParameterType::String,
            description: description.into(),
            required: true,
        }
    }

    /// An optional string parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }
}

impl HttpMethod {
    /// Method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl FunctionDescriptor {
    /// Names of all required parameters, in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FunctionDescriptor {
        FunctionDescriptor {
            name: "sample".to_string(),
            description: "Sample function".to_string(),
            parameters: vec![
                ParameterSpec::required("a", "first"),
                ParameterSpec::optional("b", "second"),
                ParameterSpec::required("c", "third"),
            ],
            endpoint: "/tools/sample".to_string(),
            auth_requirements: Vec::new(),
            http_method: HttpMethod::Post,
        }
    }

    #[test]
    fn test_required_parameters_keep_declaration_order() {
        let descriptor = sample();
        let required: Vec<_> = descriptor.required_parameters().collect();
        assert_eq!(required, vec!["a", "c"]);
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["http_method"], "POST");
        assert_eq!(value["auth_requirements"], serde_json::json!([]));
        assert_eq!(
            value["parameters"][1],
            serde_json::json!({
                "name": "b",
                "type": "string",
                "description": "second",
                "required": false
            })
        );
    }
}
