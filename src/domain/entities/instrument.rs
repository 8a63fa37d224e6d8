//! Instrument entity - static reference data for a tradable asset

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::price::Price;
use serde::{Deserialize, Serialize};

/// A tradable instrument with a fixed unit price. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    symbol: String,
    name: String,
    price: Price,
}

impl Instrument {
    /// Create an instrument from raw reference data.
    ///
    /// # Arguments
    /// * `symbol` - Unique identifier, e.g. "AAPL" (non-empty)
    /// * `name` - Display name, e.g. "Apple Inc."
    /// * `price` - Unit price (>= 0, finite)
    pub fn new(symbol: &str, name: &str, price: f64) -> Result<Self, ValidationError> {
        if symbol.trim().is_empty() {
            return Err(ValidationError::InvalidSymbol(
                "symbol must be non-empty".to_string(),
            ));
        }
        Ok(Instrument {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price: Price::new(price)?,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_new() {
        let instrument = Instrument::new("AAPL", "Apple Inc.", 145.23).unwrap();
        assert_eq!(instrument.symbol(), "AAPL");
        assert_eq!(instrument.name(), "Apple Inc.");
        assert_eq!(instrument.price().value(), 145.23);
    }

    #[test]
    fn test_instrument_empty_symbol() {
        let result = Instrument::new("", "Nameless Corp.", 10.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_instrument_blank_symbol() {
        let result = Instrument::new("   ", "Nameless Corp.", 10.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_instrument_negative_price() {
        let result = Instrument::new("AAPL", "Apple Inc.", -1.0);
        assert_eq!(result.unwrap_err(), ValidationError::MustBeNonNegative);
    }

    #[test]
    fn test_instrument_zero_price() {
        let result = Instrument::new("FREE", "Free Shares Ltd.", 0.0);
        assert!(result.is_ok());
    }
}
