//! End-of-service gratuity calculation.
//!
//! Gratuity accrues a number of days' wage per year of service, at one rate
//! for the first tier of years and another rate after it. The daily wage is
//! the monthly salary over a fixed 30-day month.
//!
//! ## Rule Structure
//!
//! - Under `min_years_for_gratuity`: nothing accrues.
//! - Up to `first_years_period`: `daily_rate × first_years_rate × years`.
//! - Beyond it: the full first tier plus `daily_rate × later_years_rate` per
//!   additional year.
//! - Resignation before five years (where the rule set applies the penalty):
//!   one third of the amount from one to three years, two thirds from three
//!   to five.
//! - The result never exceeds `monthly_salary × max_gratuity_years`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::json;

use crate::config::EmploymentRuleSet;
use crate::error::EngineResult;
use crate::models::{BenefitType, BreakdownLine, CalculationResult, EmploymentInputs, SeparationType};

use super::common::{
    AuditTrail, DAYS_PER_MONTH, checked, fmt_dec, require_positive, require_service_years,
    round_currency,
};

/// Service at or above which resignation no longer reduces the gratuity.
pub const RESIGNATION_FULL_ENTITLEMENT_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Service at or above which a resigning employee keeps two thirds.
pub const RESIGNATION_TWO_THIRDS_YEARS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Service at or above which a resigning employee keeps one third.
pub const RESIGNATION_ONE_THIRD_YEARS: Decimal = Decimal::ONE;

/// Returns the fraction `(numerator, denominator)` of the gratuity a
/// resigning employee keeps, or `None` when service is outside the
/// proration bands.
///
/// Service under one year is left alone here; it normally earns nothing in
/// the first place and is not penalized twice.
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::resignation_fraction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(resignation_fraction(Decimal::from(2)), Some((1, 3)));
/// assert_eq!(resignation_fraction(Decimal::from(4)), Some((2, 3)));
/// assert_eq!(resignation_fraction(Decimal::from(5)), None);
/// ```
pub fn resignation_fraction(years: Decimal) -> Option<(u32, u32)> {
    if years >= RESIGNATION_FULL_ENTITLEMENT_YEARS || years < RESIGNATION_ONE_THIRD_YEARS {
        None
    } else if years >= RESIGNATION_TWO_THIRDS_YEARS {
        Some((2, 3))
    } else {
        Some((1, 3))
    }
}

/// Calculates the end-of-service gratuity.
///
/// # Arguments
///
/// * `rules` - The jurisdiction rule set
/// * `inputs` - Uses `monthly_salary`, `years_of_service` and `separation_type`
///
/// # Returns
///
/// A [`CalculationResult`] whose amount is rounded to cents, or
/// `InvalidInput` if the salary is not positive, the service is negative or
/// implausibly long, or the arithmetic overflows. Intermediate tier sums are
/// kept unrounded; only the final amount and the breakdown lines are rounded.
///
/// # Examples
///
/// ## Three years, terminated
///
/// ```
/// use benefit_engine::calculation::calculate_gratuity;
/// use benefit_engine::config::RuleRegistry;
/// use benefit_engine::models::EmploymentInputs;
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::builtin();
/// let inputs = EmploymentInputs::new(Decimal::from(3000), Decimal::from(3));
///
/// let result = calculate_gratuity(registry.lookup("AE"), &inputs).unwrap();
/// assert_eq!(result.amount.to_string(), "6300.00");
/// ```
///
/// ## Same service, resigned
///
/// ```
/// use benefit_engine::calculation::calculate_gratuity;
/// use benefit_engine::config::RuleRegistry;
/// use benefit_engine::models::{EmploymentInputs, SeparationType};
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::builtin();
/// let inputs = EmploymentInputs::new(Decimal::from(3000), Decimal::from(3))
///     .with_separation(SeparationType::Resignation);
///
/// let result = calculate_gratuity(registry.lookup("AE"), &inputs).unwrap();
/// assert_eq!(result.amount.to_string(), "4200.00");
/// ```
pub fn calculate_gratuity(
    rules: &EmploymentRuleSet,
    inputs: &EmploymentInputs,
) -> EngineResult<CalculationResult> {
    let salary = inputs.monthly_salary;
    let years = inputs.years_of_service;
    require_positive(salary, "monthly_salary")?;
    require_service_years(years)?;

    let gratuity = &rules.gratuity;
    let mut trail = AuditTrail::new();
    let mut breakdown = Vec::new();

    let daily_rate = checked(salary.checked_div(DAYS_PER_MONTH), "monthly_salary")?;
    trail.record(
        "daily_rate",
        "Daily Rate",
        json!({
            "monthly_salary": fmt_dec(salary),
            "days_per_month": fmt_dec(DAYS_PER_MONTH)
        }),
        json!({ "daily_rate": fmt_dec(daily_rate) }),
        format!(
            "Monthly salary {} over a fixed {}-day month gives a daily rate of {}",
            fmt_dec(salary),
            fmt_dec(DAYS_PER_MONTH),
            fmt_dec(daily_rate)
        ),
    );

    // Tiered accrual
    let first_rate = checked(daily_rate.checked_mul(gratuity.first_years_rate), "monthly_salary")?;
    let later_rate = checked(daily_rate.checked_mul(gratuity.later_years_rate), "monthly_salary")?;

    let (first_tier, later_tier, reasoning) = if years < gratuity.min_years_for_gratuity {
        (
            Decimal::ZERO,
            Decimal::ZERO,
            format!(
                "{} years of service is under the {} year minimum, no gratuity accrues",
                fmt_dec(years),
                fmt_dec(gratuity.min_years_for_gratuity)
            ),
        )
    } else if years <= gratuity.first_years_period {
        let first = checked(first_rate.checked_mul(years), "years_of_service")?;
        (
            first,
            Decimal::ZERO,
            format!(
                "{} years at {} days' wage per year",
                fmt_dec(years),
                fmt_dec(gratuity.first_years_rate)
            ),
        )
    } else {
        let first = checked(
            first_rate.checked_mul(gratuity.first_years_period),
            "years_of_service",
        )?;
        let later_years = years - gratuity.first_years_period;
        let later = checked(later_rate.checked_mul(later_years), "years_of_service")?;
        (
            first,
            later,
            format!(
                "First {} years at {} days' wage per year, remaining {} years at {} days' wage per year",
                fmt_dec(gratuity.first_years_period),
                fmt_dec(gratuity.first_years_rate),
                fmt_dec(later_years),
                fmt_dec(gratuity.later_years_rate)
            ),
        )
    };
    let base = checked(first_tier.checked_add(later_tier), "years_of_service")?;

    trail.record(
        "gratuity_tiers",
        "Tiered Gratuity Accrual",
        json!({
            "years_of_service": fmt_dec(years),
            "daily_rate": fmt_dec(daily_rate),
            "min_years_for_gratuity": fmt_dec(gratuity.min_years_for_gratuity),
            "first_years_period": fmt_dec(gratuity.first_years_period),
            "first_years_rate": fmt_dec(gratuity.first_years_rate),
            "later_years_rate": fmt_dec(gratuity.later_years_rate)
        }),
        json!({
            "first_tier": fmt_dec(first_tier),
            "later_tier": fmt_dec(later_tier),
            "base_amount": fmt_dec(base)
        }),
        reasoning,
    );

    if years >= gratuity.min_years_for_gratuity {
        let first_years = years.min(gratuity.first_years_period);
        breakdown.push(BreakdownLine::new(
            "first_tier",
            format!(
                "{} years at {} days per year",
                fmt_dec(first_years),
                fmt_dec(gratuity.first_years_rate)
            ),
            round_currency(first_tier),
        ));
    }
    if years > gratuity.first_years_period && years >= gratuity.min_years_for_gratuity {
        breakdown.push(BreakdownLine::new(
            "later_tier",
            format!(
                "{} years at {} days per year",
                fmt_dec(years - gratuity.first_years_period),
                fmt_dec(gratuity.later_years_rate)
            ),
            round_currency(later_tier),
        ));
    }

    let mut amount = base;

    if gratuity.resignation_penalty && inputs.separation_type == SeparationType::Resignation {
        amount = apply_resignation_penalty(amount, years, &mut trail, &mut breakdown)?;
    }

    let cap = checked(
        salary.checked_mul(gratuity.max_gratuity_years),
        "monthly_salary",
    )?;
    let capped = amount > cap;
    trail.record(
        "gratuity_cap",
        "Statutory Gratuity Cap",
        json!({
            "amount": fmt_dec(amount),
            "monthly_salary": fmt_dec(salary),
            "max_gratuity_years": fmt_dec(gratuity.max_gratuity_years)
        }),
        json!({
            "cap": fmt_dec(cap),
            "capped": capped
        }),
        if capped {
            format!(
                "Amount {} exceeds the cap of {} months' salary ({}), reduced to the cap",
                fmt_dec(amount),
                fmt_dec(gratuity.max_gratuity_years),
                fmt_dec(cap)
            )
        } else {
            format!(
                "Amount {} is within the cap of {} months' salary ({})",
                fmt_dec(amount),
                fmt_dec(gratuity.max_gratuity_years),
                fmt_dec(cap)
            )
        },
    );
    if capped {
        breakdown.push(BreakdownLine::new(
            "statutory_cap",
            format!("Cap of {} months' salary", fmt_dec(gratuity.max_gratuity_years)),
            round_currency(cap - amount),
        ));
        amount = cap;
    }

    // Rounding must not lift the amount above a cap with sub-cent digits.
    let mut cap_cents = cap.round_dp_with_strategy(2, RoundingStrategy::ToZero);
    cap_cents.rescale(2);
    let amount = round_currency(amount).min(cap_cents);

    Ok(CalculationResult {
        benefit_type: BenefitType::Gratuity,
        jurisdiction_code: rules.code().to_string(),
        fallback_applied: false,
        amount,
        currency_code: rules.currency_code().to_string(),
        entitlement_days: None,
        breakdown,
        audit_steps: trail.into_steps(),
    })
}

fn apply_resignation_penalty(
    amount: Decimal,
    years: Decimal,
    trail: &mut AuditTrail,
    breakdown: &mut Vec<BreakdownLine>,
) -> EngineResult<Decimal> {
    let Some((numerator, denominator)) = resignation_fraction(years) else {
        trail.record(
            "resignation_penalty",
            "Resignation Proration",
            json!({ "years_of_service": fmt_dec(years), "amount": fmt_dec(amount) }),
            json!({ "fraction": "1", "amount": fmt_dec(amount) }),
            format!(
                "{} years of service is outside the proration bands, amount unchanged",
                fmt_dec(years)
            ),
        );
        return Ok(amount);
    };

    // Multiply before dividing so exact thirds stay exact.
    let prorated = checked(
        amount.checked_mul(Decimal::from(numerator)),
        "monthly_salary",
    )? / Decimal::from(denominator);

    trail.record(
        "resignation_penalty",
        "Resignation Proration",
        json!({ "years_of_service": fmt_dec(years), "amount": fmt_dec(amount) }),
        json!({
            "fraction": format!("{}/{}", numerator, denominator),
            "amount": fmt_dec(prorated)
        }),
        format!(
            "Resigned after {} years (under {}), keeps {}/{} of {}",
            fmt_dec(years),
            fmt_dec(RESIGNATION_FULL_ENTITLEMENT_YEARS),
            numerator,
            denominator,
            fmt_dec(amount)
        ),
    );

    if !amount.is_zero() {
        breakdown.push(BreakdownLine::new(
            "resignation_proration",
            format!("Resignation keeps {}/{}", numerator, denominator),
            round_currency(prorated - amount),
        ));
    }

    Ok(prorated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn inputs(salary: &str, years: &str) -> EmploymentInputs {
        EmploymentInputs::new(dec(salary), dec(years))
    }

    fn resigned(salary: &str, years: &str) -> EmploymentInputs {
        inputs(salary, years).with_separation(SeparationType::Resignation)
    }

    // ==========================================================================
    // GR-001: 3 years, termination -> 100 x 21 x 3
    // ==========================================================================
    #[test]
    fn test_gr_001_three_years_termination() {
        let rules = builtin::default_rule_set();
        let result = calculate_gratuity(&rules, &inputs("3000", "3")).unwrap();

        assert_eq!(result.amount, dec("6300.00"));
        assert_eq!(result.amount.to_string(), "6300.00");
        assert_eq!(result.currency_code, "AED");
        assert_eq!(result.jurisdiction_code, "AE");
        assert_eq!(result.benefit_type, BenefitType::Gratuity);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].key, "first_tier");
        assert_eq!(result.breakdown[0].amount, dec("6300.00"));
    }

    // ==========================================================================
    // GR-002: 3 years, resignation -> two thirds
    // ==========================================================================
    #[test]
    fn test_gr_002_three_years_resignation_keeps_two_thirds() {
        let rules = builtin::default_rule_set();
        let result = calculate_gratuity(&rules, &resigned("3000", "3")).unwrap();

        assert_eq!(result.amount, dec("4200.00"));
        let proration = result.breakdown_line("resignation_proration").unwrap();
        assert_eq!(proration.amount, dec("-2100.00"));
        assert_eq!(result.breakdown_total(), result.amount);

        let step = result.audit_step("resignation_penalty").unwrap();
        assert_eq!(step.output["fraction"].as_str().unwrap(), "2/3");
    }

    // ==========================================================================
    // GR-003: 7 years -> first tier plus later tier
    // ==========================================================================
    #[test]
    fn test_gr_003_seven_years_spans_both_tiers() {
        let rules = builtin::default_rule_set();
        let result = calculate_gratuity(&rules, &inputs("3000", "7")).unwrap();

        assert_eq!(result.amount, dec("16500.00"));
        assert_eq!(result.breakdown_line("first_tier").unwrap().amount, dec("10500.00"));
        assert_eq!(result.breakdown_line("later_tier").unwrap().amount, dec("6000.00"));

        let step = result.audit_step("gratuity_tiers").unwrap();
        assert_eq!(step.output["first_tier"].as_str().unwrap(), "10500");
        assert_eq!(step.output["later_tier"].as_str().unwrap(), "6000");
    }

    #[test]
    fn test_resignation_between_one_and_three_years_keeps_one_third() {
        let rules = builtin::default_rule_set();
        // 100 x 21 x 2 = 4200, one third = 1400
        let result = calculate_gratuity(&rules, &resigned("3000", "2")).unwrap();
        assert_eq!(result.amount, dec("1400.00"));
    }

    #[test]
    fn test_resignation_at_five_years_is_not_prorated() {
        let rules = builtin::default_rule_set();
        let terminated = calculate_gratuity(&rules, &inputs("3000", "5")).unwrap();
        let resigned = calculate_gratuity(&rules, &resigned("3000", "5")).unwrap();

        assert_eq!(resigned.amount, dec("10500.00"));
        assert_eq!(resigned.amount, terminated.amount);
        assert!(resigned.breakdown_line("resignation_proration").is_none());
    }

    #[test]
    fn test_resignation_ignored_when_rule_set_has_no_penalty() {
        let mut rules = builtin::default_rule_set();
        rules.gratuity.resignation_penalty = false;

        let result = calculate_gratuity(&rules, &resigned("3000", "3")).unwrap();
        assert_eq!(result.amount, dec("6300.00"));
        assert!(result.audit_step("resignation_penalty").is_none());
    }

    #[test]
    fn test_under_minimum_service_earns_nothing() {
        let rules = builtin::default_rule_set();
        let result = calculate_gratuity(&rules, &inputs("3000", "0.9")).unwrap();

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.amount.to_string(), "0.00");
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_under_one_year_resignation_is_not_double_penalized() {
        let mut rules = builtin::default_rule_set();
        rules.gratuity.min_years_for_gratuity = Decimal::ZERO;

        // 100 x 21 x 0.5 = 1050, no proration under one year
        let result = calculate_gratuity(&rules, &resigned("3000", "0.5")).unwrap();
        assert_eq!(result.amount, dec("1050.00"));
        let step = result.audit_step("resignation_penalty").unwrap();
        assert_eq!(step.output["fraction"].as_str().unwrap(), "1");
    }

    #[test]
    fn test_zero_years_is_zero() {
        let mut rules = builtin::default_rule_set();
        rules.gratuity.min_years_for_gratuity = Decimal::ZERO;
        let result = calculate_gratuity(&rules, &inputs("3000", "0")).unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_years() {
        let rules = builtin::default_rule_set();
        // 100 x 21 x 2.5 = 5250
        let result = calculate_gratuity(&rules, &inputs("3000", "2.5")).unwrap();
        assert_eq!(result.amount, dec("5250.00"));
    }

    #[test]
    fn test_cap_limits_long_service() {
        let rules = builtin::default_rule_set();
        // 40 years: 10500 + 100 x 30 x 35 = 115500, cap 3000 x 24 = 72000
        let result = calculate_gratuity(&rules, &inputs("3000", "40")).unwrap();

        assert_eq!(result.amount, dec("72000.00"));
        let cap_line = result.breakdown_line("statutory_cap").unwrap();
        assert_eq!(cap_line.amount, dec("-43500.00"));
        assert_eq!(result.breakdown_total(), result.amount);
        assert_eq!(
            result.audit_step("gratuity_cap").unwrap().output["capped"],
            serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn test_sub_cent_cap_is_not_exceeded_by_rounding() {
        let rules = builtin::default_rule_set();
        // cap 0.000625 x 24 = 0.015, which would round up to 0.02
        let result = calculate_gratuity(&rules, &inputs("0.000625", "40")).unwrap();
        assert_eq!(result.amount, dec("0.01"));
        assert_eq!(result.amount.to_string(), "0.01");
        assert!(result.amount <= dec("0.000625") * rules.gratuity.max_gratuity_years);
    }

    #[test]
    fn test_sub_cent_salary_below_and_at_cap() {
        let rules = builtin::default_rule_set();
        // 0.0075 / 30 x 21 x 1 = 0.00525, under the 0.18 cap
        let uncapped = calculate_gratuity(&rules, &inputs("0.0075", "1")).unwrap();
        assert_eq!(uncapped.amount, dec("0.01"));
        // 48 years: 0.02625 + 0.3225 = 0.34875, capped at exactly 0.18
        let capped = calculate_gratuity(&rules, &inputs("0.0075", "48")).unwrap();
        assert_eq!(capped.amount, dec("0.18"));
    }

    #[test]
    fn test_uneven_daily_rate_rounds_once_at_the_end() {
        let rules = builtin::default_rule_set();
        // 1000 / 30 x 21 x 3 = 2100 exactly when not rounded in between
        let result = calculate_gratuity(&rules, &inputs("1000", "3")).unwrap();
        assert_eq!(result.amount, dec("2100.00"));
    }

    #[test]
    fn test_audit_steps_in_order() {
        let rules = builtin::default_rule_set();
        let result = calculate_gratuity(&rules, &resigned("3000", "4")).unwrap();

        let ids: Vec<&str> = result.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["daily_rate", "gratuity_tiers", "resignation_penalty", "gratuity_cap"]
        );
        assert_eq!(result.audit_steps[0].output["daily_rate"].as_str().unwrap(), "100");
        assert_eq!(result.audit_steps[3].step_number, 4);
    }

    #[test]
    fn test_non_positive_salary_is_invalid() {
        let rules = builtin::default_rule_set();
        for salary in ["0", "-100"] {
            let err = calculate_gratuity(&rules, &inputs(salary, "3")).unwrap_err();
            assert!(matches!(
                err,
                EngineError::InvalidInput { ref field, .. } if field == "monthly_salary"
            ));
        }
    }

    #[test]
    fn test_negative_years_is_invalid() {
        let rules = builtin::default_rule_set();
        let err = calculate_gratuity(&rules, &inputs("3000", "-1")).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "years_of_service"
        ));
    }

    #[test]
    fn test_absurd_years_is_invalid() {
        let rules = builtin::default_rule_set();
        assert!(calculate_gratuity(&rules, &inputs("3000", "1000000")).is_err());
    }

    #[test]
    fn test_overflowing_salary_is_invalid() {
        let rules = builtin::default_rule_set();
        let inputs = EmploymentInputs::new(Decimal::MAX, dec("40"));
        let err = calculate_gratuity(&rules, &inputs).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_resignation_fraction_bands() {
        assert_eq!(resignation_fraction(dec("0.99")), None);
        assert_eq!(resignation_fraction(dec("1")), Some((1, 3)));
        assert_eq!(resignation_fraction(dec("2.99")), Some((1, 3)));
        assert_eq!(resignation_fraction(dec("3")), Some((2, 3)));
        assert_eq!(resignation_fraction(dec("4.99")), Some((2, 3)));
        assert_eq!(resignation_fraction(dec("5")), None);
    }
}
