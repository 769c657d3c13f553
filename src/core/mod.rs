//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the tool
//! server: error handling, configuration, the shared server state, and the
//! HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ToolServer;
pub use transport::{HttpConfig, HttpTransport};
