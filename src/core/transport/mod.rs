//! Transport layer for the tool server.
//!
//! Opal talks to custom tools over plain HTTP: a discovery `GET` and one
//! `POST` per tool. This module owns the listener, the router, and the
//! middleware stack (CORS, body limit, request tracing).

mod config;
mod error;
pub mod http;

pub use config::{DEFAULT_BODY_LIMIT, HttpConfig};
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
