//! Account entity - cash balance plus positions, with the buy/sell operations

use crate::domain::entities::instrument::Instrument;
use crate::domain::entities::position::Position;
use crate::domain::errors::TradeError;
use crate::domain::value_objects::share_count::ShareCount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Record of a committed trade, returned by [`Account::buy`] and
/// [`Account::sell`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub side: TradeSide,
    pub symbol: String,
    pub instrument_name: String,
    pub quantity: ShareCount,
    pub unit_price: f64,
    pub total_value: f64,
    pub balance_after: f64,
    pub executed_at: DateTime<Utc>,
}

/// One row of a portfolio listing, in symbol order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub symbol: String,
    pub instrument_name: String,
    pub quantity: ShareCount,
}

/// A trading account: cash balance and positions keyed by instrument
/// symbol. Positions sold down to zero are removed, so the map only ever
/// contains instruments the account actually holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    age: u32,
    balance: f64,
    positions: BTreeMap<String, Position>,
}

impl Account {
    pub fn new(name: &str, age: u32, starting_balance: f64) -> Self {
        Account {
            name: name.to_string(),
            age,
            balance: starting_balance,
            positions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Buy `quantity` shares of `instrument` at its fixed price.
    ///
    /// On success the cost is deducted and the position for the
    /// instrument's symbol is created or incremented. On failure the
    /// account is left untouched.
    pub fn buy(
        &mut self,
        instrument: &Instrument,
        quantity: ShareCount,
    ) -> Result<TradeReceipt, TradeError> {
        let total_cost = instrument.price().total_for(quantity);

        if total_cost > self.balance {
            tracing::debug!(
                account = %self.name,
                symbol = instrument.symbol(),
                required = total_cost,
                available = self.balance,
                "buy rejected: insufficient funds"
            );
            return Err(TradeError::InsufficientFunds {
                required: total_cost,
                available: self.balance,
            });
        }

        self.balance -= total_cost;
        if !quantity.is_zero() {
            self.positions
                .entry(instrument.symbol().to_string())
                .and_modify(|position| position.increase(quantity))
                .or_insert_with(|| Position::new(instrument.name(), quantity));
        }

        tracing::info!(
            account = %self.name,
            symbol = instrument.symbol(),
            %quantity,
            total_cost,
            balance = self.balance,
            "buy executed"
        );

        Ok(TradeReceipt {
            side: TradeSide::Buy,
            symbol: instrument.symbol().to_string(),
            instrument_name: instrument.name().to_string(),
            quantity,
            unit_price: instrument.price().value(),
            total_value: total_cost,
            balance_after: self.balance,
            executed_at: Utc::now(),
        })
    }

    /// Sell `quantity` shares of `instrument` at its fixed price.
    ///
    /// On success the position is decremented (and removed if it reaches
    /// zero) and the proceeds are credited. On failure the account is
    /// left untouched.
    pub fn sell(
        &mut self,
        instrument: &Instrument,
        quantity: ShareCount,
    ) -> Result<TradeReceipt, TradeError> {
        let symbol = instrument.symbol();

        let position = match self.positions.get_mut(symbol) {
            Some(position) => position,
            None => {
                tracing::debug!(
                    account = %self.name,
                    symbol,
                    "sell rejected: no position"
                );
                return Err(TradeError::NoPosition {
                    symbol: symbol.to_string(),
                });
            }
        };

        let held = position.quantity;
        if !position.decrease(quantity) {
            tracing::debug!(
                account = %self.name,
                symbol,
                held = held.value(),
                requested = quantity.value(),
                "sell rejected: insufficient shares"
            );
            return Err(TradeError::InsufficientShares {
                symbol: symbol.to_string(),
                held: held.value(),
                requested: quantity.value(),
            });
        }

        if position.quantity.is_zero() {
            self.positions.remove(symbol);
        }

        let proceeds = instrument.price().total_for(quantity);
        self.balance += proceeds;

        tracing::info!(
            account = %self.name,
            symbol,
            %quantity,
            proceeds,
            balance = self.balance,
            "sell executed"
        );

        Ok(TradeReceipt {
            side: TradeSide::Sell,
            symbol: symbol.to_string(),
            instrument_name: instrument.name().to_string(),
            quantity,
            unit_price: instrument.price().value(),
            total_value: proceeds,
            balance_after: self.balance,
            executed_at: Utc::now(),
        })
    }

    /// All held positions in symbol order. Zero-quantity rows cannot
    /// appear because positions are pruned when sold down to zero.
    pub fn portfolio(&self) -> Vec<PortfolioEntry> {
        self.positions
            .iter()
            .map(|(symbol, position)| PortfolioEntry {
                symbol: symbol.clone(),
                instrument_name: position.instrument_name.clone(),
                quantity: position.quantity,
            })
            .collect()
    }

    /// Shares held for `symbol`, zero when no position exists.
    pub fn held_quantity(&self, symbol: &str) -> ShareCount {
        self.positions
            .get(symbol)
            .map(|position| position.quantity)
            .unwrap_or_else(|| ShareCount::new(0))
    }
}
