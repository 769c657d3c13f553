//! Opal Tool Server Library
//!
//! This crate provides an HTTP server implementing the Optimizely Opal
//! custom tool contract: a discovery manifest describing callable functions
//! and one endpoint per function.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, shared server state and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Discovery manifest types, the tool registry and tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use opal_tool_server::core::{Config, HttpTransport, ToolServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = ToolServer::new(config.clone());
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
