//! Length-of-service helpers.
//!
//! Calculators take service as fractional years. Forms usually collect it as
//! whole years plus months, or as employment start and end dates; these
//! functions convert both into the fractional form.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Converts whole years plus months into fractional years (`years + months / 12`).
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::years_of_service_from_parts;
/// use rust_decimal::Decimal;
///
/// assert_eq!(years_of_service_from_parts(2, 6).unwrap(), Decimal::new(25, 1));
/// assert!(years_of_service_from_parts(2, 12).is_err());
/// ```
pub fn years_of_service_from_parts(years: u32, months: u32) -> EngineResult<Decimal> {
    if months >= 12 {
        return Err(EngineError::invalid_input(
            "service.months",
            format!("must be between 0 and 11, got {}", months),
        ));
    }
    Ok(Decimal::from(years) + Decimal::from(months) / Decimal::from(12))
}

/// Counts the calendar months completed between two dates.
///
/// A month is complete once the end date reaches the start date's day of
/// month, or the last day of a shorter month (31 Jan to 28 Feb is one month).
pub fn completed_months_between(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::invalid_input(
            "employment_end_date",
            format!("must not be before the start date {}", start),
        ));
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() && !is_last_day_of_month(end) {
        months -= 1;
    }

    Ok(months.max(0) as u32)
}

/// Converts an employment period into fractional years of completed months.
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::years_of_service_between;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 9, 15).unwrap();
/// assert_eq!(years_of_service_between(start, end).unwrap(), Decimal::new(35, 1));
/// ```
pub fn years_of_service_between(start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal> {
    let months = completed_months_between(start, end)?;
    Ok(Decimal::from(months / 12) + Decimal::from(months % 12) / Decimal::from(12))
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(years_of_service_from_parts(0, 0).unwrap(), Decimal::ZERO);
        assert_eq!(years_of_service_from_parts(3, 0).unwrap(), dec("3"));
        assert_eq!(years_of_service_from_parts(1, 3).unwrap(), dec("1.25"));
    }

    #[test]
    fn test_from_parts_rejects_twelve_months() {
        let err = years_of_service_from_parts(1, 12).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "service.months"
        ));
    }

    #[test]
    fn test_completed_months_same_day() {
        assert_eq!(
            completed_months_between(date("2020-01-10"), date("2020-01-10")).unwrap(),
            0
        );
    }

    #[test]
    fn test_completed_months_counts_anniversary() {
        assert_eq!(
            completed_months_between(date("2020-01-10"), date("2021-01-10")).unwrap(),
            12
        );
        assert_eq!(
            completed_months_between(date("2020-01-10"), date("2021-01-09")).unwrap(),
            11
        );
    }

    #[test]
    fn test_completed_months_month_end() {
        assert_eq!(
            completed_months_between(date("2023-01-31"), date("2023-02-28")).unwrap(),
            1
        );
        assert_eq!(
            completed_months_between(date("2023-01-31"), date("2023-02-27")).unwrap(),
            0
        );
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let err = completed_months_between(date("2023-05-01"), date("2023-04-30")).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_years_between() {
        assert_eq!(
            years_of_service_between(date("2018-06-01"), date("2025-06-01")).unwrap(),
            dec("7")
        );
        assert_eq!(
            years_of_service_between(date("2024-01-01"), date("2024-07-01")).unwrap(),
            dec("0.5")
        );
    }
}
