//! Error types for the cake pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading pricing rules or
//! pricing an order.

use thiserror::Error;

/// The message returned to clients when an order contains no cakes.
pub const NO_CAKES_MESSAGE: &str = "Must select at least one cake";

/// The main error type for the cake pricing engine.
///
/// Unknown flavors, shapes, decorations and the like are never errors; they
/// are priced at zero. The only rejected order input is an order without
/// any cakes (or one too large to price in `u64` cents).
///
/// # Example
///
/// ```
/// use cake_pricing::error::EngineError;
///
/// let error = EngineError::NoCakesSelected;
/// assert_eq!(error.to_string(), "Must select at least one cake");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Both size counts were zero after coercion.
    #[error("Must select at least one cake")]
    NoCakesSelected,

    /// A line item or the total does not fit in `u64` cents.
    #[error("Price overflow while computing {component}")]
    PriceOverflow {
        /// The line item being computed when the overflow occurred.
        component: String,
    },

    /// The rules table has no base price for a size the order references.
    #[error("Base price not found for size: {size}")]
    BasePriceNotFound {
        /// The size identifier (e.g. "6inch").
        size: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but failed validation.
    #[error("Invalid pricing configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the order rather than the rules.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::NoCakesSelected | EngineError::PriceOverflow { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cakes_selected_displays_fixed_message() {
        assert_eq!(EngineError::NoCakesSelected.to_string(), NO_CAKES_MESSAGE);
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/pricing.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/pricing.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_base_price_not_found_displays_size() {
        let error = EngineError::BasePriceNotFound {
            size: "8inch".to_string(),
        };
        assert_eq!(error.to_string(), "Base price not found for size: 8inch");
    }

    #[test]
    fn test_price_overflow_displays_component() {
        let error = EngineError::PriceOverflow {
            component: "layer_price".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Price overflow while computing layer_price"
        );
    }

    #[test]
    fn test_client_errors_are_order_errors_only() {
        assert!(EngineError::NoCakesSelected.is_client_error());
        assert!(
            EngineError::PriceOverflow {
                component: "total_price".to_string()
            }
            .is_client_error()
        );
        assert!(
            !EngineError::InvalidConfig {
                message: "x".to_string()
            }
            .is_client_error()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_cakes() -> EngineResult<()> {
            Err(EngineError::NoCakesSelected)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_cakes()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
