//! Overtime premium pay calculation.
//!
//! Overtime is paid per hour at the employee's hourly rate times a
//! multiplier chosen by the kind of day the hours were worked on. The hourly
//! rate is the monthly salary over the rule set's working hours per month.

use rust_decimal::Decimal;
use serde_json::json;

use crate::config::EmploymentRuleSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{BenefitType, BreakdownLine, CalculationResult, EmploymentInputs};

use super::common::{AuditTrail, checked, fmt_dec, require_positive, round_currency};

/// Calculates overtime premium pay.
///
/// # Arguments
///
/// * `rules` - The jurisdiction rule set
/// * `inputs` - Uses `monthly_salary`, `overtime_hours` and `overtime_type`
///
/// # Returns
///
/// A [`CalculationResult`] with two breakdown lines: the hours at the plain
/// hourly rate and the premium on top. Fails with `InvalidInput` when the
/// salary or hours are not positive, or the arithmetic overflows.
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::calculate_overtime;
/// use benefit_engine::config::RuleRegistry;
/// use benefit_engine::models::{EmploymentInputs, OvertimeType};
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::builtin();
/// let inputs = EmploymentInputs::new(Decimal::from(2400), Decimal::ZERO)
///     .with_overtime(Decimal::from(10), OvertimeType::Normal);
///
/// // 2400 / 240 = 10 per hour, x 1.25 x 10 hours
/// let result = calculate_overtime(registry.lookup("AE"), &inputs).unwrap();
/// assert_eq!(result.amount.to_string(), "125.00");
/// ```
pub fn calculate_overtime(
    rules: &EmploymentRuleSet,
    inputs: &EmploymentInputs,
) -> EngineResult<CalculationResult> {
    let salary = inputs.monthly_salary;
    let hours = inputs.overtime_hours;
    require_positive(salary, "monthly_salary")?;
    require_positive(hours, "overtime_hours")?;

    let overtime = &rules.overtime;
    if overtime.work_hours_per_month <= Decimal::ZERO {
        return Err(EngineError::InvalidRuleSet {
            code: rules.code().to_string(),
            message: "overtime.work_hours_per_month must be greater than zero".to_string(),
        });
    }

    let mut trail = AuditTrail::new();

    let hourly_rate = checked(
        salary.checked_div(overtime.work_hours_per_month),
        "monthly_salary",
    )?;
    trail.record(
        "hourly_rate",
        "Hourly Rate",
        json!({
            "monthly_salary": fmt_dec(salary),
            "work_hours_per_month": fmt_dec(overtime.work_hours_per_month)
        }),
        json!({ "hourly_rate": fmt_dec(hourly_rate) }),
        format!(
            "Monthly salary {} over {} working hours gives an hourly rate of {}",
            fmt_dec(salary),
            fmt_dec(overtime.work_hours_per_month),
            fmt_dec(hourly_rate)
        ),
    );

    let multiplier = overtime.multiplier(inputs.overtime_type);
    let base_pay = checked(hourly_rate.checked_mul(hours), "overtime_hours")?;
    let amount = checked(base_pay.checked_mul(multiplier), "overtime_hours")?;
    let premium = amount - base_pay;
    let percent = multiplier
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| EngineError::InvalidRuleSet {
            code: rules.code().to_string(),
            message: format!("overtime multiplier {} is too large", fmt_dec(multiplier)),
        })?;

    trail.record(
        "overtime_premium",
        "Overtime Premium",
        json!({
            "hours": fmt_dec(hours),
            "hourly_rate": fmt_dec(hourly_rate),
            "overtime_type": inputs.overtime_type
        }),
        json!({
            "multiplier": fmt_dec(multiplier),
            "amount": fmt_dec(amount)
        }),
        format!(
            "{} {:?} overtime hours at {}% of the hourly rate {}",
            fmt_dec(hours),
            inputs.overtime_type,
            fmt_dec(percent),
            fmt_dec(hourly_rate)
        ),
    );

    let breakdown = vec![
        BreakdownLine::new(
            "base_pay",
            format!("{} hours at the hourly rate", fmt_dec(hours)),
            round_currency(base_pay),
        ),
        BreakdownLine::new(
            "overtime_premium",
            format!("Premium at {}x", fmt_dec(multiplier)),
            round_currency(premium),
        ),
    ];

    Ok(CalculationResult {
        benefit_type: BenefitType::Overtime,
        jurisdiction_code: rules.code().to_string(),
        fallback_applied: false,
        amount: round_currency(amount),
        currency_code: rules.currency_code().to_string(),
        entitlement_days: None,
        breakdown,
        audit_steps: trail.into_steps(),
    })
}
