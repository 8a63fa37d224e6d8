use crate::domain::value_objects::share_count::ShareCount;
use serde::{Deserialize, Serialize};

/// Shares of one instrument held inside an account, keyed by the
/// instrument symbol in the account's position map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub instrument_name: String,
    pub quantity: ShareCount,
}

impl Position {
    pub fn new(instrument_name: &str, quantity: ShareCount) -> Self {
        Position {
            instrument_name: instrument_name.to_string(),
            quantity,
        }
    }

    pub fn increase(&mut self, quantity: ShareCount) {
        self.quantity = self.quantity.add(quantity);
    }

    /// Checked decrease. False (and no change) when the position holds
    /// fewer shares than requested.
    pub fn decrease(&mut self, quantity: ShareCount) -> bool {
        match self.quantity.subtract(quantity) {
            Some(remaining) => {
                self.quantity = remaining;
                true
            }
            None => false,
        }
    }
}
