use crate::domain::errors::ValidationError;
use crate::domain::value_objects::share_count::ShareCount;
use serde::{Deserialize, Serialize};

/// Unit price of an instrument. Non-negative and finite by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite);
        }
        if value < 0.0 {
            return Err(ValidationError::MustBeNonNegative);
        }
        Ok(Price(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total cash value of `quantity` shares at this price.
    pub fn total_for(&self, quantity: ShareCount) -> f64 {
        self.0 * quantity.value() as f64
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
