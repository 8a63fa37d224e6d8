//! Papertrade - in-memory stock trading ledger
//!
//! Accounts hold a cash balance and per-instrument positions and can buy
//! or sell at fixed instrument prices. Trade outcomes are typed results;
//! text rendering lives in the reporting service.

pub mod config;
pub mod domain;
