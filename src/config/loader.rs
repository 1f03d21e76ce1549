//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pricing
//! rules table from a YAML file and validating it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EIGHT_INCH, PricingRulesTable, SIX_INCH, normalize_template_id};

/// Loads and validates pricing rules tables.
///
/// # File format
///
/// ```text
/// version: "2025-06"
/// effectiveDate: 2025-06-01
/// currency: USD
/// basePrices:
///   6inch: 8000
///   8inch: 15500
/// layerPrice: 1500
/// flavorPrices:
///   chocolate: 500
/// templates:
///   fathers-day:
///     name: Father's Day Special
///     price: 4999
///     aliases: ["999"]
/// ```
///
/// # Example
///
/// ```no_run
/// use cake_pricing::config::ConfigLoader;
///
/// let rules = ConfigLoader::load("./config/pricing.yaml")?;
/// println!("Loaded pricing rules version {}", rules.version);
/// # Ok::<(), cake_pricing::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a rules table from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns the validated table, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or missing fields (`ConfigParseError`)
    /// - The table fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<PricingRulesTable> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let table = Self::parse(&path_str, &content)?;
        debug!(
            path = %path_str,
            version = %table.version,
            templates = table.templates.len(),
            "Loaded pricing rules"
        );
        Ok(table)
    }

    /// Parses and validates a rules table from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn parse(source: &str, content: &str) -> EngineResult<PricingRulesTable> {
        let table: PricingRulesTable =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&table)?;
        Ok(table)
    }

    /// Checks the invariants the engine relies on.
    ///
    /// - Both `6inch` and `8inch` have a base price
    /// - Every template has a non-empty name
    /// - Template identifiers and aliases are unique after normalization
    pub fn validate(table: &PricingRulesTable) -> EngineResult<()> {
        for size in [SIX_INCH, EIGHT_INCH] {
            if table.base_price(size).is_none() {
                return Err(EngineError::InvalidConfig {
                    message: format!("missing base price for size '{}'", size),
                });
            }
        }

        let mut seen = HashSet::new();
        for (id, rule) in &table.templates {
            if rule.name.trim().is_empty() {
                return Err(EngineError::InvalidConfig {
                    message: format!("template '{}' has an empty name", id),
                });
            }

            for identifier in std::iter::once(id).chain(rule.aliases.iter()) {
                let normalized = normalize_template_id(identifier);
                if normalized.is_empty() {
                    return Err(EngineError::InvalidConfig {
                        message: format!("template '{}' has a blank identifier", id),
                    });
                }
                if !seen.insert(normalized) {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "template identifier '{}' is used more than once",
                            identifier
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
