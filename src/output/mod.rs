//! Terminal output formatting
//!
//! Display utilities for session summaries.

pub mod display;
pub mod formatters;

pub use display::print_session_report;
