pub mod account;
pub mod instrument;
pub mod position;
