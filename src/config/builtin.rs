//! Compiled-in jurisdiction rule sets.
//!
//! These are the rule sets used when no rule directory is configured. The
//! YAML files under `config/jurisdictions/` carry the same values and are
//! checked against this table in the loader tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    Currency, EmploymentRuleSet, GratuityRules, LeaveRules, OvertimeRules, RuleSetMetadata,
};

/// Returns the documented default rule set (United Arab Emirates).
///
/// | Parameter | Value |
/// |---|---|
/// | first_years_rate / first_years_period | 21 days / 5 years |
/// | later_years_rate | 30 days |
/// | min_years_for_gratuity | 1 |
/// | resignation_penalty | true |
/// | max_gratuity_years | 24 |
/// | normal / weekend / holiday rate | 1.25 / 1.5 / 1.5 |
/// | work_hours_per_month | 240 |
/// | annual_days / min_years_for_full_leave / days_per_month_first_year | 30 / 1 / 2 |
/// | currency | AED |
pub fn default_rule_set() -> EmploymentRuleSet {
    united_arab_emirates()
}

/// Returns every compiled-in rule set.
pub fn builtin_rule_sets() -> Vec<EmploymentRuleSet> {
    vec![
        united_arab_emirates(),
        saudi_arabia(),
        qatar(),
        kuwait(),
        bahrain(),
        oman(),
    ]
}

fn d(value: i64) -> Decimal {
    Decimal::from(value)
}

fn metadata(code: &str, name: &str, effective: (i32, u32, u32), source: &str) -> RuleSetMetadata {
    let (year, month, day) = effective;
    RuleSetMetadata {
        code: code.to_string(),
        name: name.to_string(),
        version: format!("{:04}-{:02}-{:02}", year, month, day),
        effective_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        source: source.to_string(),
    }
}

fn currency(code: &str, symbol: &str) -> Currency {
    Currency {
        code: code.to_string(),
        symbol: symbol.to_string(),
    }
}

fn united_arab_emirates() -> EmploymentRuleSet {
    EmploymentRuleSet {
        jurisdiction: metadata(
            "AE",
            "United Arab Emirates",
            (2022, 2, 2),
            "Federal Decree-Law No. 33 of 2021",
        ),
        currency: currency("AED", "د.إ"),
        gratuity: GratuityRules {
            first_years_rate: d(21),
            first_years_period: d(5),
            later_years_rate: d(30),
            min_years_for_gratuity: d(1),
            resignation_penalty: true,
            max_gratuity_years: d(24),
        },
        overtime: OvertimeRules {
            normal_rate: Decimal::new(125, 2),
            weekend_rate: Decimal::new(15, 1),
            holiday_rate: Decimal::new(15, 1),
            work_hours_per_month: d(240),
        },
        leave: LeaveRules {
            annual_days: d(30),
            min_years_for_full_leave: d(1),
            days_per_month_first_year: d(2),
        },
    }
}

fn saudi_arabia() -> EmploymentRuleSet {
    EmploymentRuleSet {
        jurisdiction: metadata(
            "SA",
            "Saudi Arabia",
            (2025, 2, 19),
            "Labor Law, Royal Decree No. M/51",
        ),
        currency: currency("SAR", "﷼"),
        gratuity: GratuityRules {
            first_years_rate: d(15),
            first_years_period: d(5),
            later_years_rate: d(30),
            min_years_for_gratuity: d(2),
            resignation_penalty: true,
            max_gratuity_years: d(120),
        },
        overtime: OvertimeRules {
            normal_rate: Decimal::new(15, 1),
            weekend_rate: Decimal::new(15, 1),
            holiday_rate: Decimal::new(15, 1),
            work_hours_per_month: d(208),
        },
        leave: LeaveRules {
            annual_days: d(21),
            min_years_for_full_leave: d(1),
            days_per_month_first_year: Decimal::new(175, 2),
        },
    }
}

fn qatar() -> EmploymentRuleSet {
    EmploymentRuleSet {
        jurisdiction: metadata("QA", "Qatar", (2004, 10, 1), "Law No. 14 of 2004"),
        currency: currency("QAR", "ر.ق"),
        gratuity: GratuityRules {
            first_years_rate: d(21),
            first_years_period: d(5),
            later_years_rate: d(21),
            min_years_for_gratuity: d(1),
            resignation_penalty: false,
            max_gratuity_years: d(120),
        },
        overtime: OvertimeRules {
            normal_rate: Decimal::new(125, 2),
            weekend_rate: Decimal::new(15, 1),
            holiday_rate: Decimal::new(15, 1),
            work_hours_per_month: d(208),
        },
        leave: LeaveRules {
            annual_days: d(21),
            min_years_for_full_leave: d(1),
            days_per_month_first_year: Decimal::new(175, 2),
        },
    }
}

fn kuwait() -> EmploymentRuleSet {
    EmploymentRuleSet {
        jurisdiction: metadata("KW", "Kuwait", (2010, 2, 21), "Law No. 6 of 2010"),
        currency: currency("KWD", "د.ك"),
        gratuity: GratuityRules {
            first_years_rate: d(15),
            first_years_period: d(5),
            later_years_rate: d(30),
            min_years_for_gratuity: d(1),
            resignation_penalty: true,
            max_gratuity_years: d(18),
        },
        overtime: OvertimeRules {
            normal_rate: Decimal::new(125, 2),
            weekend_rate: Decimal::new(15, 1),
            holiday_rate: d(2),
            work_hours_per_month: d(208),
        },
        leave: LeaveRules {
            annual_days: d(30),
            min_years_for_full_leave: d(1),
            days_per_month_first_year: Decimal::new(25, 1),
        },
    }
}

fn bahrain() -> EmploymentRuleSet {
    EmploymentRuleSet {
        jurisdiction: metadata("BH", "Bahrain", (2012, 9, 26), "Law No. 36 of 2012"),
        currency: currency("BHD", "د.ب"),
        gratuity: GratuityRules {
            first_years_rate: d(15),
            first_years_period: d(3),
            later_years_rate: d(30),
            min_years_for_gratuity: d(1),
            resignation_penalty: false,
            max_gratuity_years: d(120),
        },
        overtime: OvertimeRules {
            normal_rate: Decimal::new(125, 2),
            weekend_rate: Decimal::new(15, 1),
            holiday_rate: Decimal::new(15, 1),
            work_hours_per_month: d(208),
        },
        leave: LeaveRules {
            annual_days: d(30),
            min_years_for_full_leave: d(1),
            days_per_month_first_year: Decimal::new(25, 1),
        },
    }
}

fn oman() -> EmploymentRuleSet {
    EmploymentRuleSet {
        jurisdiction: metadata("OM", "Oman", (2023, 7, 25), "Royal Decree No. 53/2023"),
        currency: currency("OMR", "ر.ع."),
        gratuity: GratuityRules {
            first_years_rate: d(15),
            first_years_period: d(3),
            later_years_rate: d(30),
            min_years_for_gratuity: d(1),
            resignation_penalty: false,
            max_gratuity_years: d(120),
        },
        overtime: OvertimeRules {
            normal_rate: Decimal::new(125, 2),
            weekend_rate: Decimal::new(15, 1),
            holiday_rate: Decimal::new(15, 1),
            work_hours_per_month: d(216),
        },
        leave: LeaveRules {
            annual_days: d(30),
            min_years_for_full_leave: d(1),
            days_per_month_first_year: Decimal::new(25, 1),
        },
    }
}
