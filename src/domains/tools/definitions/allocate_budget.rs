//! Influencer budget allocation tool.
//!
//! Currently an echo stub: it validates that a campaign brief and a
//! candidates CSV were supplied and returns them unchanged, together with
//! the selected optimization mode.

use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::domains::tools::{
    error::ToolError,
    handlers::{ToolHandler, ToolInvocationRequest, require_parameters, truthy_parameter},
    manifest::{FunctionDescriptor, HttpMethod, ParameterSpec},
};

/// Validated parameters for a budget allocation call.
///
/// Values are kept exactly as received; nothing is parsed as JSON or CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocateInfluencerBudgetParams {
    pub campaign_brief_json: Value,
    pub candidates_csv_text: Value,
    pub mode: Value,
}

impl AllocateInfluencerBudgetParams {
    /// Decode and validate the raw parameter mapping.
    pub fn decode(
        descriptor: &FunctionDescriptor,
        parameters: &Map<String, Value>,
    ) -> Result<Self, ToolError> {
        require_parameters(descriptor, parameters)?;

        let required = |name: &str| {
            truthy_parameter(parameters, name)
                .cloned()
                .ok_or_else(|| ToolError::missing_required(descriptor.required_parameters()))
        };

        Ok(Self {
            campaign_brief_json: required(AllocateInfluencerBudgetTool::CAMPAIGN_BRIEF_JSON)?,
            candidates_csv_text: required(AllocateInfluencerBudgetTool::CANDIDATES_CSV_TEXT)?,
            mode: truthy_parameter(parameters, AllocateInfluencerBudgetTool::MODE)
                .cloned()
                .unwrap_or_else(|| Value::from(AllocateInfluencerBudgetTool::DEFAULT_MODE)),
        })
    }
}

/// Budget allocation tool implementation.
#[derive(Debug, Clone)]
pub struct AllocateInfluencerBudgetTool {
    descriptor: FunctionDescriptor,
}

impl AllocateInfluencerBudgetTool {
    /// Tool name as advertised through discovery.
    pub const NAME: &'static str = "allocate_influencer_budget";

    /// Tool description shown to the orchestrator.
    pub const DESCRIPTION: &'static str = "Allocates budget across influencers given a campaign brief and candidates CSV text.";

    /// Path the tool is invoked on.
    pub const ENDPOINT: &'static str = "/tools/allocate_influencer_budget";

    pub const CAMPAIGN_BRIEF_JSON: &'static str = "campaign_brief_json";
    pub const CANDIDATES_CSV_TEXT: &'static str = "candidates_csv_text";
    pub const MODE: &'static str = "mode";

    /// Mode used when the caller does not pick one.
    pub const DEFAULT_MODE: &'static str = "binary_selection";

    pub fn new() -> Self {
        Self {
            descriptor: Self::to_descriptor(),
        }
    }

    /// Build the discovery descriptor for this tool.
    pub fn to_descriptor() -> FunctionDescriptor {
        FunctionDescriptor {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            parameters: vec![
                ParameterSpec::required(
                    Self::CAMPAIGN_BRIEF_JSON,
                    "Normalized campaign brief as a JSON string.",
                ),
                ParameterSpec::required(
                    Self::CANDIDATES_CSV_TEXT,
                    "CSV text with header row containing influencer candidates.",
                ),
                ParameterSpec::optional(
                    Self::MODE,
                    "Optimization mode (e.g. binary_selection).",
                ),
            ],
            endpoint: Self::ENDPOINT.to_string(),
            auth_requirements: Vec::new(),
            http_method: HttpMethod::Post,
        }
    }

    /// Execute the tool logic.
    ///
    /// Echo only; the allocation itself is not implemented yet.
    pub fn execute(params: AllocateInfluencerBudgetParams) -> Value {
        let mut received = Map::new();
        received.insert(Self::CAMPAIGN_BRIEF_JSON.to_string(), params.campaign_brief_json);
        received.insert(Self::CANDIDATES_CSV_TEXT.to_string(), params.candidates_csv_text);
        received.insert(Self::MODE.to_string(), params.mode);
        Value::Object(received)
    }
}

impl Default for AllocateInfluencerBudgetTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ToolHandler for AllocateInfluencerBudgetTool {
    fn descriptor(&self) -> &FunctionDescriptor {
        &self.descriptor
    }

    #[instrument(skip_all)]
    async fn invoke(&self, request: ToolInvocationRequest) -> Result<Value, ToolError> {
        let params = match AllocateInfluencerBudgetParams::decode(&self.descriptor, &request.parameters)
        {
            Ok(params) => params,
            Err(e) => {
                warn!("Rejected call: {}", e);
                return Err(e);
            }
        };

        info!("Budget allocation requested (mode: {})", params.mode);
        Ok(Self::execute(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn decode(value: Value) -> Result<AllocateInfluencerBudgetParams, ToolError> {
        AllocateInfluencerBudgetParams::decode(
            &AllocateInfluencerBudgetTool::to_descriptor(),
            &params(value),
        )
    }

    const MISSING: &str = "Missing required parameters: campaign_brief_json, candidates_csv_text";

    #[test]
    fn test_descriptor_parameters() {
        let descriptor = AllocateInfluencerBudgetTool::to_descriptor();
        assert_eq!(descriptor.name, "allocate_influencer_budget");
        assert_eq!(descriptor.endpoint, "/tools/allocate_influencer_budget");

        let flags: Vec<_> = descriptor
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.required))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("campaign_brief_json", true),
                ("candidates_csv_text", true),
                ("mode", false),
            ]
        );
    }

    #[test]
    fn test_echoed_keys_are_declared() {
        let descriptor = AllocateInfluencerBudgetTool::to_descriptor();
        let echoed = decode(json!({
            "campaign_brief_json": "{}",
            "candidates_csv_text": "a,b"
        }))
        .unwrap();

        let value = AllocateInfluencerBudgetTool::execute(echoed);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), descriptor.parameters.len());
        for key in keys {
            assert!(
                descriptor.parameters.iter().any(|p| p.name == key),
                "undeclared key {key}"
            );
        }
    }

    #[test]
    fn test_decode_defaults_mode() {
        let decoded = decode(json!({
            "campaign_brief_json": "{}",
            "candidates_csv_text": "a,b\n1,2"
        }))
        .unwrap();
        assert_eq!(decoded.campaign_brief_json, json!("{}"));
        assert_eq!(decoded.candidates_csv_text, json!("a,b\n1,2"));
        assert_eq!(decoded.mode, json!("binary_selection"));
    }

    #[test]
    fn test_decode_falsy_mode_uses_default() {
        for mode in [json!(""), json!(null), json!(false), json!(0)] {
            let decoded = decode(json!({
                "campaign_brief_json": "{}",
                "candidates_csv_text": "x",
                "mode": mode
            }))
            .unwrap();
            assert_eq!(decoded.mode, json!("binary_selection"));
        }
    }

    #[test]
    fn test_decode_keeps_supplied_mode() {
        let decoded = decode(json!({
            "campaign_brief_json": "{}",
            "candidates_csv_text": "x",
            "mode": "optimize"
        }))
        .unwrap();
        assert_eq!(decoded.mode, json!("optimize"));
    }

    #[test]
    fn test_decode_missing_fields() {
        let cases = [
            json!({}),
            json!({"campaign_brief_json": "{}"}),
            json!({"candidates_csv_text": "x"}),
            json!({"campaign_brief_json": "", "candidates_csv_text": "x"}),
            json!({"campaign_brief_json": "{}", "candidates_csv_text": null}),
        ];
        for case in cases {
            let err = decode(case).unwrap_err();
            assert_eq!(err.to_string(), MISSING);
        }
    }

    #[tokio::test]
    async fn test_invoke_echoes_values_unchanged() {
        let tool = AllocateInfluencerBudgetTool::new();
        let brief = "{ \"budget\": 1000, \"name\": \"Caf\u{e9}\" }";
        let csv = "handle,followers\r\n@a,100\n";

        let request = ToolInvocationRequest {
            parameters: params(json!({
                "campaign_brief_json": brief,
                "candidates_csv_text": csv
            })),
        };
        let received = tool.invoke(request).await.unwrap();

        assert_eq!(received["campaign_brief_json"], json!(brief));
        assert_eq!(received["candidates_csv_text"], json!(csv));
        assert_eq!(received["mode"], json!("binary_selection"));
    }

    #[tokio::test]
    async fn test_invoke_rejects_empty_request() {
        let tool = AllocateInfluencerBudgetTool::new();
        let err = tool
            .invoke(ToolInvocationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING);
    }
}
