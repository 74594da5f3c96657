//! Application state for the labor rules engine API.

use std::sync::Arc;

use crate::rules::RulesEngine;

/// Shared application state.
///
/// Holds the rules engine, which is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RulesEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: RulesEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns the rules engine.
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_engine() {
        let state = AppState::new(RulesEngine::new(RulesConfig::california()));
        let other = state.clone();
        assert!(std::ptr::eq(state.engine(), other.engine()));
    }
}
