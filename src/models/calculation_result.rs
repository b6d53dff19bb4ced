//! Calculation result models for the Benefit Engine.
//!
//! This module contains the [`CalculationResult`] type returned by every
//! calculator, together with the breakdown lines and audit steps that make a
//! result traceable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BenefitType;

/// A named sub-amount contributing to a result.
///
/// Reductions (resignation proration, statutory cap) are negative, so the
/// lines of a result add up to its amount within a cent per line, since each
/// line is rounded for display and only the final amount is rounded exactly.
///
/// # Example
///
/// ```
/// use benefit_engine::models::BreakdownLine;
/// use rust_decimal::Decimal;
///
/// let line = BreakdownLine::new("first_tier", "First 5 years at 21 days per year", Decimal::from(6300));
/// assert_eq!(line.key, "first_tier");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Stable identifier for programmatic use.
    pub key: String,
    /// Human-readable description.
    pub label: String,
    /// The sub-amount, rounded to cents.
    pub amount: Decimal,
}

impl BreakdownLine {
    /// Creates a breakdown line.
    pub fn new(key: impl Into<String>, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            amount,
        }
    }
}

/// A single step in the audit trail recording a rule application.
///
/// Each step captures the input, output, and reasoning for one rule, with
/// decimal values rendered as normalized strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The result of a benefit calculation.
///
/// Results are plain values: they carry no timestamps or identifiers, so the
/// same request always produces an equal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The benefit that was computed.
    pub benefit_type: BenefitType,
    /// The code of the rule set that was applied.
    pub jurisdiction_code: String,
    /// True when the requested jurisdiction was unknown and the default applied.
    pub fallback_applied: bool,
    /// The computed amount, rounded to cents.
    pub amount: Decimal,
    /// Currency of `amount`, taken from the applied rule set.
    pub currency_code: String,
    /// Leave entitlement in days (leave calculations only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlement_days: Option<Decimal>,
    /// Ordered sub-amounts for display and audit.
    pub breakdown: Vec<BreakdownLine>,
    /// Ordered record of every rule applied.
    pub audit_steps: Vec<AuditStep>,
}

impl CalculationResult {
    /// Returns the sum of all breakdown lines.
    pub fn breakdown_total(&self) -> Decimal {
        self.breakdown.iter().map(|line| line.amount).sum()
    }

    /// Looks up a breakdown line by key.
    pub fn breakdown_line(&self, key: &str) -> Option<&BreakdownLine> {
        self.breakdown.iter().find(|line| line.key == key)
    }

    /// Looks up an audit step by rule id.
    pub fn audit_step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.audit_steps.iter().find(|step| step.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            benefit_type: BenefitType::Gratuity,
            jurisdiction_code: "AE".to_string(),
            fallback_applied: false,
            amount: dec("4200.00"),
            currency_code: "AED".to_string(),
            entitlement_days: None,
            breakdown: vec![
                BreakdownLine::new("first_tier", "First tier", dec("6300.00")),
                BreakdownLine::new("resignation_proration", "Resignation", dec("-2100.00")),
            ],
            audit_steps: vec![AuditStep {
                step_number: 1,
                rule_id: "daily_rate".to_string(),
                rule_name: "Daily Rate".to_string(),
                input: serde_json::json!({"monthly_salary": "3000"}),
                output: serde_json::json!({"daily_rate": "100"}),
                reasoning: "3000 / 30 = 100".to_string(),
            }],
        }
    }

    #[test]
    fn test_breakdown_total_sums_signed_lines() {
        assert_eq!(sample_result().breakdown_total(), dec("4200.00"));
    }

    #[test]
    fn test_breakdown_and_audit_lookup() {
        let result = sample_result();
        assert_eq!(
            result.breakdown_line("resignation_proration").unwrap().amount,
            dec("-2100.00")
        );
        assert!(result.breakdown_line("later_tier").is_none());
        assert_eq!(result.audit_step("daily_rate").unwrap().step_number, 1);
    }

    #[test]
    fn test_serialization_uses_string_decimals_and_skips_absent_days() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(json["amount"], "4200.00");
        assert_eq!(json["benefit_type"], "gratuity");
        assert_eq!(json["currency_code"], "AED");
        assert!(json.get("entitlement_days").is_none());
        assert_eq!(json["breakdown"][1]["key"], "resignation_proration");
    }

    #[test]
    fn test_serialization_includes_entitlement_days_when_present() {
        let mut result = sample_result();
        result.benefit_type = BenefitType::Leave;
        result.entitlement_days = Some(dec("30"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["entitlement_days"], "30");

        let back: CalculationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
