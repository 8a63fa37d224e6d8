//! Reporting service - renders trade outcomes and account state as text
//!
//! Core trade logic returns typed values; everything user-facing is
//! formatted here so the entities stay free of I/O concerns.

use crate::domain::entities::account::{Account, TradeReceipt, TradeSide};
use crate::domain::errors::TradeError;

/// One-line confirmation for a committed trade.
pub fn render_receipt(receipt: &TradeReceipt) -> String {
    let verb = match receipt.side {
        TradeSide::Buy => "bought",
        TradeSide::Sell => "sold",
    };
    format!(
        "Successfully {} {} shares of {}.",
        verb, receipt.quantity, receipt.instrument_name
    )
}

/// One-line explanation for a rejected trade.
pub fn render_trade_error(error: &TradeError) -> String {
    match error {
        TradeError::InsufficientFunds {
            required,
            available,
        } => format!(
            "Insufficient funds: required ${:.2}, available ${:.2}.",
            required, available
        ),
        TradeError::NoPosition { symbol } => format!("You do not own {}.", symbol),
        TradeError::InsufficientShares {
            symbol, requested, ..
        } => format!("You do not own {} shares of {}.", requested, symbol),
    }
}

/// Multi-line portfolio listing, one row per held position in symbol order.
pub fn render_portfolio(account: &Account) -> String {
    let mut lines = vec![format!("Portfolio of {}:", account.name())];
    for entry in account.portfolio() {
        lines.push(format!(
            "{}: {} shares",
            entry.instrument_name, entry.quantity
        ));
    }
    lines.join("\n")
}

/// Balance report line with two-decimal formatting.
pub fn render_balance(account: &Account) -> String {
    format!("Balance of {}: ${:.2}", account.name(), account.balance())
}
