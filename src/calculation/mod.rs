//! Calculation logic for the Benefit Engine.
//!
//! This module contains the three benefit calculators (end-of-service
//! gratuity, overtime premium pay, and annual leave entitlement with
//! encashment) plus helpers for converting service periods into fractional
//! years. Every calculator is a pure function of a rule set and the inputs.

mod common;
mod gratuity;
mod leave;
mod overtime;
mod service;

pub use common::{DAYS_PER_MONTH, MAX_YEARS_OF_SERVICE, round_currency};
pub use gratuity::{
    RESIGNATION_FULL_ENTITLEMENT_YEARS, RESIGNATION_ONE_THIRD_YEARS, RESIGNATION_TWO_THIRDS_YEARS,
    calculate_gratuity, resignation_fraction,
};
pub use leave::{calculate_leave, leave_entitlement};
pub use overtime::calculate_overtime;
pub use service::{completed_months_between, years_of_service_between, years_of_service_from_parts};
