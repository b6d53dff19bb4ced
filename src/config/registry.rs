//! Jurisdiction rule registry.
//!
//! This module provides the [`RuleRegistry`] type, a read-only table from
//! jurisdiction code to [`EmploymentRuleSet`]. Lookups never fail: codes
//! that are not in the table resolve to the default rule set.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::builtin;
use super::types::EmploymentRuleSet;

/// The code of the documented default rule set.
pub const DEFAULT_JURISDICTION_CODE: &str = "AE";

/// The outcome of resolving a jurisdiction code.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// The rule set that applies.
    pub rule_set: &'a EmploymentRuleSet,
    /// True when the requested code was unknown and the default was used.
    pub fallback_applied: bool,
}

/// Read-only table of jurisdiction rule sets.
///
/// Built once at start-up and then shared (typically behind an `Arc`). All
/// rule sets are validated on construction, so calculators can rely on
/// rule-set invariants such as a positive `work_hours_per_month`.
///
/// # Example
///
/// ```
/// use benefit_engine::config::RuleRegistry;
///
/// let registry = RuleRegistry::builtin();
/// assert_eq!(registry.lookup("sa").currency_code(), "SAR");
///
/// // Unknown codes fall back to the default rule set.
/// assert_eq!(registry.lookup("ZZ").code(), "AE");
/// ```
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rule_sets: HashMap<String, EmploymentRuleSet>,
    default_rule_set: EmploymentRuleSet,
}

impl RuleRegistry {
    /// Creates a registry from the compiled-in rule table.
    pub fn builtin() -> Self {
        let default_rule_set = builtin::default_rule_set();
        let rule_sets = builtin::builtin_rule_sets()
            .into_iter()
            .map(|rules| (normalize_code(rules.code()), rules))
            .collect();
        Self {
            rule_sets,
            default_rule_set,
        }
    }

    /// Creates a registry from externally supplied rule sets.
    ///
    /// Every rule set is validated and codes must be unique (case-insensitive).
    /// The default is the supplied set whose code is
    /// [`DEFAULT_JURISDICTION_CODE`], or the built-in default when the
    /// supplied table has no such entry.
    pub fn from_rule_sets(rule_sets: Vec<EmploymentRuleSet>) -> EngineResult<Self> {
        let mut table = HashMap::with_capacity(rule_sets.len());

        for mut rules in rule_sets {
            rules.validate()?;
            let code = normalize_code(rules.code());
            rules.jurisdiction.code = code.clone();
            if table.contains_key(&code) {
                return Err(EngineError::InvalidRuleSet {
                    code,
                    message: "duplicate jurisdiction code".to_string(),
                });
            }
            table.insert(code, rules);
        }

        let default_rule_set = table
            .get(DEFAULT_JURISDICTION_CODE)
            .cloned()
            .unwrap_or_else(builtin::default_rule_set);

        Ok(Self {
            rule_sets: table,
            default_rule_set,
        })
    }

    /// Returns the rule set for a jurisdiction code.
    ///
    /// The lookup is total: codes are trimmed and matched case-insensitively,
    /// and absent codes return [`RuleRegistry::default_rule_set`].
    pub fn lookup(&self, code: &str) -> &EmploymentRuleSet {
        self.resolve(code).rule_set
    }

    /// Resolves a jurisdiction code, reporting whether the default was used.
    pub fn resolve(&self, code: &str) -> Resolution<'_> {
        match self.rule_sets.get(&normalize_code(code)) {
            Some(rule_set) => Resolution {
                rule_set,
                fallback_applied: false,
            },
            None => {
                debug!(
                    requested = %code,
                    default = %self.default_rule_set.code(),
                    "Unknown jurisdiction, using default rule set"
                );
                Resolution {
                    rule_set: &self.default_rule_set,
                    fallback_applied: true,
                }
            }
        }
    }

    /// Returns true if the code has its own entry in the table.
    pub fn contains(&self, code: &str) -> bool {
        self.rule_sets.contains_key(&normalize_code(code))
    }

    /// Returns the default rule set.
    pub fn default_rule_set(&self) -> &EmploymentRuleSet {
        &self.default_rule_set
    }

    /// Returns all jurisdiction codes in the table, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rule_sets.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Returns all rule sets in the table, sorted by code.
    pub fn rule_sets(&self) -> Vec<&EmploymentRuleSet> {
        let mut sets: Vec<&EmploymentRuleSet> = self.rule_sets.values().collect();
        sets.sort_by(|a, b| a.code().cmp(b.code()));
        sets
    }

    /// Returns the number of jurisdictions in the table.
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    /// Returns true if the table has no entries (lookups still succeed).
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
