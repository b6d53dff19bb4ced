//! Annual leave entitlement and encashment.
//!
//! Employees below the full-leave service threshold accrue a fixed number of
//! days per completed month; from the threshold on they receive the full
//! annual entitlement. Unused days are encashed at the daily wage (monthly
//! salary over a fixed 30-day month).

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::json;

use crate::config::EmploymentRuleSet;
use crate::error::EngineResult;
use crate::models::{BenefitType, BreakdownLine, CalculationResult, EmploymentInputs};

use super::common::{
    AuditTrail, DAYS_PER_MONTH, checked, fmt_dec, require_non_negative, require_positive,
    require_service_years, round_currency,
};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Month counts are rounded to this many places before flooring. Only the
/// representation residue of computed twelfths lives beyond it.
const MONTH_RESIDUE_DP: u32 = 20;

/// Computes the leave entitlement in whole days for the given service.
///
/// Below `min_years_for_full_leave` the entitlement is
/// `floor(years × 12) × days_per_month_first_year`, rounded to the nearest
/// day. Otherwise it is `annual_days`.
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::leave_entitlement;
/// use benefit_engine::config::RuleRegistry;
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::builtin();
/// let rules = registry.lookup("AE");
///
/// // Six completed months at two days per month.
/// assert_eq!(leave_entitlement(rules, Decimal::new(5, 1)).unwrap(), Decimal::from(12));
/// assert_eq!(leave_entitlement(rules, Decimal::from(2)).unwrap(), Decimal::from(30));
/// ```
pub fn leave_entitlement(rules: &EmploymentRuleSet, years: Decimal) -> EngineResult<Decimal> {
    let leave = &rules.leave;
    if years >= leave.min_years_for_full_leave {
        return Ok(leave.annual_days);
    }

    let months = completed_months(years)?;
    let accrued = checked(
        months.checked_mul(leave.days_per_month_first_year),
        "years_of_service",
    )?;

    Ok(accrued.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Whole months in a fractional year count.
fn completed_months(years: Decimal) -> EngineResult<Decimal> {
    let months = checked(years.checked_mul(MONTHS_PER_YEAR), "years_of_service")?;
    // 4/12 * 12 = 3.9999999999999999999999999996
    Ok(months.round_dp(MONTH_RESIDUE_DP).floor())
}

/// Calculates the leave entitlement and the encashment of unused days.
///
/// # Arguments
///
/// * `rules` - The jurisdiction rule set
/// * `inputs` - Uses `monthly_salary`, `years_of_service` and `unused_leave_days`
///
/// # Returns
///
/// A [`CalculationResult`] whose amount is the encashment and whose
/// `entitlement_days` holds the entitlement. Fails with `InvalidInput` when
/// the salary is not positive, or the unused days or service are negative.
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::calculate_leave;
/// use benefit_engine::config::RuleRegistry;
/// use benefit_engine::models::EmploymentInputs;
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::builtin();
/// let inputs = EmploymentInputs::new(Decimal::from(3000), Decimal::from(2))
///     .with_unused_leave_days(Decimal::from(5));
///
/// let result = calculate_leave(registry.lookup("AE"), &inputs).unwrap();
/// assert_eq!(result.entitlement_days, Some(Decimal::from(30)));
/// assert_eq!(result.amount.to_string(), "500.00");
/// ```
pub fn calculate_leave(
    rules: &EmploymentRuleSet,
    inputs: &EmploymentInputs,
) -> EngineResult<CalculationResult> {
    let salary = inputs.monthly_salary;
    let years = inputs.years_of_service;
    let unused_days = inputs.unused_leave_days;
    require_positive(salary, "monthly_salary")?;
    require_non_negative(unused_days, "unused_leave_days")?;
    require_service_years(years)?;

    let leave = &rules.leave;
    let mut trail = AuditTrail::new();

    let entitlement = leave_entitlement(rules, years)?;
    let full = years >= leave.min_years_for_full_leave;
    trail.record(
        "leave_entitlement",
        "Annual Leave Entitlement",
        json!({
            "years_of_service": fmt_dec(years),
            "min_years_for_full_leave": fmt_dec(leave.min_years_for_full_leave),
            "annual_days": fmt_dec(leave.annual_days),
            "days_per_month_first_year": fmt_dec(leave.days_per_month_first_year)
        }),
        json!({ "entitlement_days": fmt_dec(entitlement) }),
        if full {
            format!(
                "{} years of service meets the {} year threshold, full {} days apply",
                fmt_dec(years),
                fmt_dec(leave.min_years_for_full_leave),
                fmt_dec(leave.annual_days)
            )
        } else {
            format!(
                "{} completed months at {} days per month gives {} days",
                fmt_dec(completed_months(years)?),
                fmt_dec(leave.days_per_month_first_year),
                fmt_dec(entitlement)
            )
        },
    );

    let daily_rate = checked(salary.checked_div(DAYS_PER_MONTH), "monthly_salary")?;
    let encashment = checked(daily_rate.checked_mul(unused_days), "unused_leave_days")?;
    trail.record(
        "leave_encashment",
        "Leave Encashment",
        json!({
            "monthly_salary": fmt_dec(salary),
            "days_per_month": fmt_dec(DAYS_PER_MONTH),
            "unused_leave_days": fmt_dec(unused_days)
        }),
        json!({
            "daily_rate": fmt_dec(daily_rate),
            "amount": fmt_dec(encashment)
        }),
        format!(
            "{} unused days at a daily rate of {}",
            fmt_dec(unused_days),
            fmt_dec(daily_rate)
        ),
    );

    let amount = round_currency(encashment);
    let breakdown = vec![BreakdownLine::new(
        "leave_encashment",
        format!("{} unused days", fmt_dec(unused_days)),
        amount,
    )];

    Ok(CalculationResult {
        benefit_type: BenefitType::Leave,
        jurisdiction_code: rules.code().to_string(),
        fallback_applied: false,
        amount,
        currency_code: rules.currency_code().to_string(),
        entitlement_days: Some(entitlement),
        breakdown,
        audit_steps: trail.into_steps(),
    })
}
