//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain: the tools advertised to and
//! invoked by an Opal orchestrator.

pub mod tools;
