//! Core data models for the Benefit Engine.
//!
//! This module contains the per-request inputs and the result types shared
//! by all calculators.

mod calculation_result;
mod inputs;

pub use calculation_result::{AuditStep, BreakdownLine, CalculationResult};
pub use inputs::{BenefitType, EmploymentInputs, OvertimeType, SeparationType};
