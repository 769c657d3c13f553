//! Tools domain module.
//!
//! This module handles the Opal custom tool contract: the discovery
//! manifest advertised to the orchestrator and the tools it can invoke.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `manifest.rs` - Discovery manifest types
//! - `handlers.rs` - `ToolHandler` trait, request decoding and results
//! - `registry.rs` - Central tool registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Build its `FunctionDescriptor` and implement `ToolHandler`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! The HTTP route is derived from the descriptor's endpoint and method.

pub mod definitions;
mod error;
mod handlers;
pub mod manifest;
mod registry;

pub use error::ToolError;
pub use handlers::*;
pub use manifest::{DiscoveryManifest, FunctionDescriptor, HttpMethod, ParameterSpec, ParameterType};
pub use registry::ToolRegistry;
