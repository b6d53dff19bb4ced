//! Request types for the Benefit Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and its conversion into [`EmploymentInputs`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{years_of_service_between, years_of_service_from_parts};
use crate::error::{EngineError, EngineResult};
use crate::models::{BenefitType, EmploymentInputs, OvertimeType, SeparationType};

/// Request body for the `/calculate` endpoint.
///
/// Service may be given in exactly one of three forms: `years_of_service`
/// (fractional years), `service` (whole years plus months), or
/// `employment_start_date` with `employment_end_date`. Overtime requests may
/// omit service entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The jurisdiction whose rules apply; unknown codes use the default.
    pub jurisdiction_code: String,
    /// The benefit to calculate.
    pub benefit_type: BenefitType,
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// Service as fractional years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_service: Option<Decimal>,
    /// Service as whole years plus months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServicePeriodRequest>,
    /// First day of employment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_start_date: Option<NaiveDate>,
    /// Last day of employment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_end_date: Option<NaiveDate>,
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

/// Service split into whole years and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriodRequest {
    /// Completed years.
    pub years: u32,
    /// Additional completed months (0-11).
    #[serde(default)]
    pub months: u32,
}

impl CalculationRequest {
    /// Resolves the service fields into fractional years.
    ///
    /// Returns `Ok(None)` when no service was supplied.
    pub fn years_of_service(&self) -> EngineResult<Option<Decimal>> {
        let dates = match (self.employment_start_date, self.employment_end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            (None, None) => None,
            _ => {
                return Err(EngineError::invalid_input(
                    "employment_end_date",
                    "employment_start_date and employment_end_date must be given together",
                ));
            }
        };

        let forms = [
            self.years_of_service.is_some(),
            self.service.is_some(),
            dates.is_some(),
        ];
        if forms.iter().filter(|given| **given).count() > 1 {
            return Err(EngineError::invalid_input(
                "years_of_service",
                "give service as only one of years_of_service, service, or employment dates",
            ));
        }

        if let Some(years) = self.years_of_service {
            return Ok(Some(years));
        }
        if let Some(period) = self.service {
            return years_of_service_from_parts(period.years, period.months).map(Some);
        }
        if let Some((start, end)) = dates {
            return years_of_service_between(start, end).map(Some);
        }
        Ok(None)
    }
}

impl TryFrom<&CalculationRequest> for EmploymentInputs {
    type Error = EngineError;

    fn try_from(req: &CalculationRequest) -> EngineResult<Self> {
        let years_of_service = match req.years_of_service()? {
            Some(years) => years,
            None if req.benefit_type == BenefitType::Overtime => Decimal::ZERO,
            None => {
                return Err(EngineError::invalid_input(
                    "years_of_service",
                    format!("is required for {} calculations", req.benefit_type),
                ));
            }
        };

        Ok(EmploymentInputs {
            monthly_salary: req.monthly_salary,
            years_of_service,
            separation_type: req.separation_type,
            overtime_hours: req.overtime_hours,
            overtime_type: req.overtime_type,
            unused_leave_days: req.unused_leave_days,
        })
    }
}
