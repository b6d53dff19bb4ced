//! Rule set types for benefit calculation.
//!
//! This module contains the strongly-typed rule structures that are either
//! compiled into the binary or deserialized from per-jurisdiction YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::OvertimeType;

/// Metadata identifying a jurisdiction's rule set.
///
/// The version and effective date make each rule set an auditable record:
/// a computed result can always be traced back to the legal text it applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// The jurisdiction code (e.g., "AE").
    pub code: String,
    /// The human-readable jurisdiction name.
    pub name: String,
    /// The version of this rule set.
    pub version: String,
    /// The date from which these rules apply.
    pub effective_date: NaiveDate,
    /// The statute or regulation the rules were taken from.
    pub source: String,
}

/// Currency the jurisdiction's amounts are expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code (e.g., "AED").
    pub code: String,
    /// The currency symbol.
    pub symbol: String,
}

/// End-of-service gratuity parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityRules {
    /// Days of wage per year of service during the first tier.
    pub first_years_rate: Decimal,
    /// Length of the first tier in years.
    pub first_years_period: Decimal,
    /// Days of wage per year of service beyond the first tier.
    pub later_years_rate: Decimal,
    /// Minimum service in years before any gratuity accrues.
    pub min_years_for_gratuity: Decimal,
    /// Whether resignation before five years prorates the gratuity.
    pub resignation_penalty: bool,
    /// Statutory cap, in months of salary.
    pub max_gratuity_years: Decimal,
}

/// Overtime premium parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRules {
    /// Multiplier for overtime on a normal working day.
    pub normal_rate: Decimal,
    /// Multiplier for overtime on a weekly rest day.
    pub weekend_rate: Decimal,
    /// Multiplier for overtime on a public holiday.
    pub holiday_rate: Decimal,
    /// Working hours per month used to derive the hourly rate.
    pub work_hours_per_month: Decimal,
}

impl OvertimeRules {
    /// Returns the multiplier that applies to the given overtime type.
    ///
    /// # Example
    ///
    /// ```
    /// use benefit_engine::config::RuleRegistry;
    /// use benefit_engine::models::OvertimeType;
    /// use rust_decimal::Decimal;
    ///
    /// let registry = RuleRegistry::builtin();
    /// let rules = registry.lookup("AE");
    /// assert_eq!(rules.overtime.multiplier(OvertimeType::Normal), Decimal::new(125, 2));
    /// ```
    pub fn multiplier(&self, overtime_type: OvertimeType) -> Decimal {
        match overtime_type {
            OvertimeType::Normal => self.normal_rate,
            OvertimeType::Weekend => self.weekend_rate,
            OvertimeType::Holiday => self.holiday_rate,
        }
    }
}

/// Annual leave parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRules {
    /// Full annual leave entitlement in days.
    pub annual_days: Decimal,
    /// Service in years after which the full entitlement applies.
    pub min_years_for_full_leave: Decimal,
    /// Days accrued per completed month before the full entitlement applies.
    pub days_per_month_first_year: Decimal,
}

/// The complete set of labor-law parameters for one jurisdiction.
///
/// Rule sets are immutable once they enter a
/// [`RuleRegistry`](super::RuleRegistry); the registry only hands out shared
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRuleSet {
    /// Jurisdiction metadata.
    pub jurisdiction: RuleSetMetadata,
    /// Currency of all computed amounts.
    pub currency: Currency,
    /// Gratuity parameters.
    pub gratuity: GratuityRules,
    /// Overtime parameters.
    pub overtime: OvertimeRules,
    /// Leave parameters.
    pub leave: LeaveRules,
}

impl EmploymentRuleSet {
    /// Returns the jurisdiction code.
    pub fn code(&self) -> &str {
        &self.jurisdiction.code
    }

    /// Returns the currency code.
    pub fn currency_code(&self) -> &str {
        &self.currency.code
    }

    /// Checks the invariants every rule set must hold before it can be used.
    ///
    /// Returns [`EngineError::InvalidRuleSet`] naming the first violated field.
    pub fn validate(&self) -> EngineResult<()> {
        let code = self.code();
        let fail = |message: String| EngineError::InvalidRuleSet {
            code: code.to_string(),
            message,
        };

        if code.trim().is_empty() {
            return Err(fail("jurisdiction code must not be empty".to_string()));
        }
        if self.currency.code.trim().is_empty() {
            return Err(fail("currency code must not be empty".to_string()));
        }

        let non_negative = [
            ("gratuity.first_years_rate", self.gratuity.first_years_rate),
            ("gratuity.first_years_period", self.gratuity.first_years_period),
            ("gratuity.later_years_rate", self.gratuity.later_years_rate),
            ("gratuity.min_years_for_gratuity", self.gratuity.min_years_for_gratuity),
            ("gratuity.max_gratuity_years", self.gratuity.max_gratuity_years),
            ("leave.annual_days", self.leave.annual_days),
            ("leave.min_years_for_full_leave", self.leave.min_years_for_full_leave),
            ("leave.days_per_month_first_year", self.leave.days_per_month_first_year),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(fail(format!("{} must not be negative", field)));
            }
        }

        let multipliers = [
            ("overtime.normal_rate", self.overtime.normal_rate),
            ("overtime.weekend_rate", self.overtime.weekend_rate),
            ("overtime.holiday_rate", self.overtime.holiday_rate),
        ];
        for (field, value) in multipliers {
            if value < Decimal::ONE {
                return Err(fail(format!("{} must be at least 1", field)));
            }
        }

        if self.overtime.work_hours_per_month <= Decimal::ZERO {
            return Err(fail(
                "overtime.work_hours_per_month must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
