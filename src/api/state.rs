//! Application state for the Benefit Engine API.

use std::sync::Arc;

use crate::config::RuleRegistry;
use crate::facade::CalculationFacade;

/// Shared application state.
///
/// Holds the calculation facade, whose rule registry is loaded once and
/// shared read-only by every request handler.
#[derive(Clone)]
pub struct AppState {
    facade: CalculationFacade,
}

impl AppState {
    /// Creates a new application state over the given registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            facade: CalculationFacade::new(Arc::new(registry)),
        }
    }

    /// Returns the calculation facade.
    pub fn facade(&self) -> &CalculationFacade {
        &self.facade
    }

    /// Returns the rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        self.facade.registry()
    }
}
