//! Rule set loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! rule sets from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::registry::RuleRegistry;
use super::types::EmploymentRuleSet;

/// Loads jurisdiction rule sets from a directory of YAML files.
///
/// # Directory Structure
///
/// Each jurisdiction is one tagged record in its own file:
/// ```text
/// config/jurisdictions/
/// ├── ae.yaml
/// ├── sa.yaml
/// └── ...
/// ```
///
/// Files without a `.yaml` or `.yml` extension are ignored. Files are read in
/// path order so that error reporting is deterministic.
///
/// # Example
///
/// ```no_run
/// use benefit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jurisdictions")?;
/// let rules = loader.registry().lookup("AE");
/// println!("Loaded {} ({})", rules.jurisdiction.name, rules.jurisdiction.version);
/// # Ok::<(), benefit_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: RuleRegistry,
}

impl ConfigLoader {
    /// Loads every rule set in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The directory is missing or holds no rule files (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - Any rule set violates an invariant or duplicates a code (`InvalidRuleSet`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let files = Self::rule_files(dir)?;

        let mut rule_sets = Vec::with_capacity(files.len());
        for file in &files {
            let rules = Self::load_yaml::<EmploymentRuleSet>(file)?;
            debug!(
                path = %file.display(),
                jurisdiction = %rules.code(),
                version = %rules.jurisdiction.version,
                "Loaded rule set"
            );
            rule_sets.push(rules);
        }

        let registry = RuleRegistry::from_rule_sets(rule_sets)?;
        Ok(Self { registry })
    }

    /// Loads and parses a single rule set file.
    pub fn load_rule_set<P: AsRef<Path>>(path: P) -> EngineResult<EmploymentRuleSet> {
        let rules = Self::load_yaml::<EmploymentRuleSet>(path.as_ref())?;
        rules.validate()?;
        Ok(rules)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Lists the rule files in a directory, sorted by path.
    fn rule_files(dir: &Path) -> EngineResult<Vec<PathBuf>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rule files found)", dir_str),
            });
        }

        files.sort();
        Ok(files)
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Consumes the loader, returning the registry.
    pub fn into_registry(self) -> RuleRegistry {
        self.registry
    }
}
