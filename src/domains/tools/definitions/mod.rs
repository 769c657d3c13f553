//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod allocate_budget;

pub use allocate_budget::{AllocateInfluencerBudgetParams, AllocateInfluencerBudgetTool};
