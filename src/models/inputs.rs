//! Employment input model and related enums.
//!
//! This module defines [`EmploymentInputs`], the per-request values a
//! presentation layer collects, and the enums that select which benefit is
//! computed and how.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The benefit a calculation request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    /// End-of-service gratuity.
    Gratuity,
    /// Overtime premium pay.
    Overtime,
    /// Annual leave entitlement and encashment.
    Leave,
}

impl BenefitType {
    /// Returns the snake_case name used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitType::Gratuity => "gratuity",
            BenefitType::Overtime => "overtime",
            BenefitType::Leave => "leave",
        }
    }
}

impl fmt::Display for BenefitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the employment ended. Only affects gratuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationType {
    /// The employer ended the contract.
    #[default]
    Termination,
    /// The employee resigned.
    Resignation,
}

/// The kind of day overtime was worked on. Only affects overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeType {
    /// A normal working day.
    #[default]
    Normal,
    /// A weekly rest day.
    Weekend,
    /// A public holiday.
    Holiday,
}

/// The inputs for a single benefit calculation.
///
/// Fields a given benefit does not use are ignored by its calculator, so one
/// value can be reused across all three benefits.
///
/// # Example
///
/// ```
/// use benefit_engine::models::{EmploymentInputs, OvertimeType, SeparationType};
/// use rust_decimal::Decimal;
///
/// let inputs = EmploymentInputs::new(Decimal::from(3000), Decimal::from(3))
///     .with_separation(SeparationType::Resignation)
///     .with_overtime(Decimal::from(10), OvertimeType::Weekend)
///     .with_unused_leave_days(Decimal::from(5));
///
/// assert_eq!(inputs.separation_type, SeparationType::Resignation);
/// assert_eq!(inputs.overtime_type, OvertimeType::Weekend);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInputs {
    /// Monthly salary the benefits are based on.
    pub monthly_salary: Decimal,
    /// Length of service in years, fractional (years plus months / 12).
    #[serde(default)]
    pub years_of_service: Decimal,
    /// How the employment ended.
    #[serde(default)]
    pub separation_type: SeparationType,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// The kind of day the overtime was worked on.
    #[serde(default)]
    pub overtime_type: OvertimeType,
    /// Accrued leave days not yet taken.
    #[serde(default)]
    pub unused_leave_days: Decimal,
}

impl EmploymentInputs {
    /// Creates inputs with the given salary and service, other fields defaulted.
    pub fn new(monthly_salary: Decimal, years_of_service: Decimal) -> Self {
        Self {
            monthly_salary,
            years_of_service,
            separation_type: SeparationType::default(),
            overtime_hours: Decimal::ZERO,
            overtime_type: OvertimeType::default(),
            unused_leave_days: Decimal::ZERO,
        }
    }

    /// Sets the separation type.
    pub fn with_separation(mut self, separation_type: SeparationType) -> Self {
        self.separation_type = separation_type;
        self
    }

    /// Sets the overtime hours and the kind of day they were worked on.
    pub fn with_overtime(mut self, hours: Decimal, overtime_type: OvertimeType) -> Self {
        self.overtime_hours = hours;
        self.overtime_type = overtime_type;
        self
    }

    /// Sets the unused leave days.
    pub fn with_unused_leave_days(mut self, days: Decimal) -> Self {
        self.unused_leave_days = days;
        self
    }
}
