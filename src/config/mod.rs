//! Jurisdiction rule sets for the Benefit Engine.
//!
//! This module provides the rule-set types, the compiled-in rule table, the
//! [`RuleRegistry`] that resolves jurisdiction codes, and the
//! [`ConfigLoader`] that reads rule sets from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use benefit_engine::config::ConfigLoader;
//!
//! let registry = ConfigLoader::load("./config/jurisdictions").unwrap().into_registry();
//! println!("Loaded {} jurisdictions", registry.len());
//! ```

pub mod builtin;
mod loader;
mod registry;
mod types;

pub use loader::ConfigLoader;
pub use registry::{DEFAULT_JURISDICTION_CODE, Resolution, RuleRegistry};
pub use types::{
    Currency, EmploymentRuleSet, GratuityRules, LeaveRules, OvertimeRules, RuleSetMetadata,
};
