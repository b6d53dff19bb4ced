//! Single entry point for benefit calculations.
//!
//! [`CalculationFacade`] resolves a jurisdiction code to its rule set and
//! dispatches to the calculator for the requested benefit.

use std::sync::Arc;

use crate::calculation::{calculate_gratuity, calculate_leave, calculate_overtime};
use crate::config::RuleRegistry;
use crate::error::EngineResult;
use crate::models::{BenefitType, CalculationResult, EmploymentInputs};

/// Resolves rule sets and dispatches to the benefit calculators.
///
/// Cheap to clone; clones share the same registry.
///
/// # Example
///
/// ```
/// use benefit_engine::facade::CalculationFacade;
/// use benefit_engine::models::{BenefitType, EmploymentInputs};
/// use rust_decimal::Decimal;
///
/// let facade = CalculationFacade::builtin();
/// let inputs = EmploymentInputs::new(Decimal::from(3000), Decimal::from(7));
///
/// let result = facade.calculate("AE", BenefitType::Gratuity, &inputs).unwrap();
/// assert_eq!(result.amount.to_string(), "16500.00");
/// assert!(!result.fallback_applied);
/// ```
#[derive(Debug, Clone)]
pub struct CalculationFacade {
    registry: Arc<RuleRegistry>,
}

impl CalculationFacade {
    /// Creates a facade over the given registry.
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a facade over the compiled-in rule table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(RuleRegistry::builtin()))
    }

    /// Returns the registry rule sets are resolved from.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Calculates a benefit for a jurisdiction.
    ///
    /// Unknown jurisdiction codes are not an error: the default rule set is
    /// applied and the result's `fallback_applied` flag is set. Failures are
    /// limited to `InvalidInput` (and `InvalidRuleSet` for rule sets that
    /// bypassed registry validation).
    pub fn calculate(
        &self,
        jurisdiction_code: &str,
        benefit_type: BenefitType,
        inputs: &EmploymentInputs,
    ) -> EngineResult<CalculationResult> {
        let resolution = self.registry.resolve(jurisdiction_code);
        let rules = resolution.rule_set;

        let mut result = match benefit_type {
            BenefitType::Gratuity => calculate_gratuity(rules, inputs)?,
            BenefitType::Overtime => calculate_overtime(rules, inputs)?,
            BenefitType::Leave => calculate_leave(rules, inputs)?,
        };
        result.fallback_applied = resolution.fallback_applied;

        Ok(result)
    }
}

impl Default for CalculationFacade {
    fn default() -> Self {
        Self::builtin()
    }
}
