//! Helpers shared by the benefit calculators: input guards, checked
//! arithmetic, cent rounding and audit step numbering.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Fixed 30-day month used to derive a daily wage, regardless of calendar days.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Upper bound on years of service; anything above is treated as malformed.
pub const MAX_YEARS_OF_SERVICE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Rounds a monetary amount to cents, midpoint away from zero, at scale 2.
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("104.165").unwrap()).to_string(), "104.17");
/// assert_eq!(round_currency(Decimal::from(6300)).to_string(), "6300.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Renders a decimal for audit output.
pub(crate) fn fmt_dec(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Turns a checked arithmetic result into an `InvalidInput` on overflow.
pub(crate) fn checked(value: Option<Decimal>, field: &str) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::invalid_input(field, "value is too large to calculate"))
}

pub(crate) fn require_positive(value: Decimal, field: &str) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must be greater than zero, got {}", fmt_dec(value)),
        ));
    }
    Ok(())
}

pub(crate) fn require_non_negative(value: Decimal, field: &str) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative, got {}", fmt_dec(value)),
        ));
    }
    Ok(())
}

/// Service must be non-negative and within [`MAX_YEARS_OF_SERVICE`].
pub(crate) fn require_service_years(years: Decimal) -> EngineResult<()> {
    require_non_negative(years, "years_of_service")?;
    if years > MAX_YEARS_OF_SERVICE {
        return Err(EngineError::invalid_input(
            "years_of_service",
            format!(
                "must not exceed {} years, got {}",
                MAX_YEARS_OF_SERVICE,
                fmt_dec(years)
            ),
        ));
    }
    Ok(())
}

/// Collects audit steps, numbering them in the order they are recorded.
#[derive(Debug, Default)]
pub(crate) struct AuditTrail {
    steps: Vec<AuditStep>,
}

impl AuditTrail {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec("0.005")), dec("0.01"));
        assert_eq!(round_currency(dec("2.675")), dec("2.68"));
        assert_eq!(round_currency(dec("2.674999")), dec("2.67"));
    }

    #[test]
    fn test_round_currency_always_has_two_decimals() {
        assert_eq!(round_currency(dec("125")).to_string(), "125.00");
        assert_eq!(round_currency(dec("4200.0000000000001")).to_string(), "4200.00");
    }

    #[test]
    fn test_constants() {
        assert_eq!(DAYS_PER_MONTH, dec("30"));
        assert_eq!(MAX_YEARS_OF_SERVICE, dec("100"));
    }

    #[test]
    fn test_checked_maps_overflow_to_invalid_input() {
        let err = checked(Decimal::MAX.checked_mul(dec("2")), "monthly_salary").unwrap_err();
        assert_eq!(
            err,
            EngineError::invalid_input("monthly_salary", "value is too large to calculate")
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive(dec("0.01"), "x").is_ok());
        assert!(require_positive(Decimal::ZERO, "x").is_err());
        assert!(require_positive(dec("-1"), "x").is_err());
    }

    #[test]
    fn test_require_service_years_bounds() {
        assert!(require_service_years(Decimal::ZERO).is_ok());
        assert!(require_service_years(dec("100")).is_ok());
        assert!(require_service_years(dec("100.01")).is_err());
        assert!(require_service_years(dec("-0.5")).is_err());
    }

    #[test]
    fn test_audit_trail_numbers_steps_sequentially() {
        let mut trail = AuditTrail::new();
        trail.record("a", "A", serde_json::json!({}), serde_json::json!({}), String::new());
        trail.record("b", "B", serde_json::json!({}), serde_json::json!({}), String::new());

        let steps = trail.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step_number, 1);
        assert_eq!(steps[1].rule_id, "b");
        assert_eq!(steps[1].step_number, 2);
    }
}
