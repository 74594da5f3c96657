//! HTTP API module for the labor rules engine.
//!
//! This module provides the REST endpoints that accept extracted pay stub
//! fields and report California wage-and-hour violations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalyzeRequest;
pub use response::{AnalyzeResponse, ApiError, RuleConstants, RulesInfo};
pub use state::AppState;
