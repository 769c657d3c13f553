//! Tool server state.
//!
//! [`ToolServer`] is the immutable state shared by every request handler:
//! the loaded configuration and the registry of callable tools.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{DiscoveryManifest, ToolError, ToolInvocationRequest, ToolRegistry};

/// The tool server.
///
/// Cheap to clone; all clones share the same configuration and registry.
#[derive(Clone, Debug)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools.
    registry: Arc<ToolRegistry>,
}

impl ToolServer {
    /// Create a new server with every built-in tool registered.
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, ToolRegistry::new())
    }

    /// Create a new server with an explicit tool registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Discovery manifest for all registered tools.
    pub fn manifest(&self) -> DiscoveryManifest {
        self.registry.manifest()
    }

    /// Call a tool by name with a raw JSON request body.
    #[instrument(skip(self, body))]
    pub async fn call_tool(&self, name: &str, body: Option<&Value>) -> Result<Value> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::not_found(name))?;

        info!("Calling tool");
        let received = tool.invoke(ToolInvocationRequest::from_body(body)).await?;
        Ok(received)
    }
}
