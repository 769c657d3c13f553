//! Tool Registry - central registration for all tools.
//!
//! This module provides:
//! - The list of tools served by this process
//! - The discovery manifest built from their descriptors
//! - Lookup by tool name

use std::sync::Arc;

use super::definitions::AllocateInfluencerBudgetTool;
use super::handlers::ToolHandler;
use super::manifest::{DiscoveryManifest, FunctionDescriptor};

/// Tool registry - an immutable, ordered set of tools.
///
/// Built once at startup and shared between request handlers.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a registry with every built-in tool.
    pub fn new() -> Self {
        Self::with_tools(vec![Arc::new(AllocateInfluencerBudgetTool::new())])
    }

    /// Create a registry from an explicit list of tools.
    pub fn with_tools(tools: Vec<Arc<dyn ToolHandler>>) -> Self {
        Self { tools }
    }

    /// All registered tools, in registration order.
    pub fn tools(&self) -> &[Arc<dyn ToolHandler>] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Find a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Descriptors of all tools, in registration order.
    pub fn descriptors(&self) -> Vec<FunctionDescriptor> {
        self.tools.iter().map(|t| t.descriptor().clone()).collect()
    }

    /// Build the discovery manifest.
    pub fn manifest(&self) -> DiscoveryManifest {
        DiscoveryManifest {
            functions: self.descriptors(),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.tool_names(), vec!["allocate_influencer_budget"]);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ToolRegistry::new();
        assert!(registry.get("allocate_influencer_budget").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_manifest_has_single_function() {
        let manifest = ToolRegistry::new().manifest();
        assert_eq!(manifest.functions.len(), 1);

        let function = &manifest.functions[0];
        assert_eq!(function.name, "allocate_influencer_budget");
        assert!(function.auth_requirements.is_empty());
    }

    #[test]
    fn test_endpoints_are_unique() {
        let registry = ToolRegistry::new();
        let mut endpoints: Vec<_> = registry
            .descriptors()
            .into_iter()
            .map(|d| d.endpoint)
            .collect();
        let total = endpoints.len();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), total);
    }
}
