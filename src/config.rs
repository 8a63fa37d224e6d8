use crate::domain::entities::instrument::Instrument;
use crate::domain::errors::ValidationError;

/// Reference data for one instrument, as configured.
#[derive(Debug, Clone)]
pub struct InstrumentSpec {
    pub symbol: String,
    pub name: String,
    pub price: f64,
}

/// Configuration for the trading simulation
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub starting_balance: f64,
    pub instruments: Vec<InstrumentSpec>,
}

impl SimulationConfig {
    /// Default configuration with the standard instrument set
    pub fn default() -> SimulationConfig {
        SimulationConfig {
            starting_balance: 10000.0,
            instruments: vec![
                InstrumentSpec {
                    symbol: "AAPL".to_string(),
                    name: "Apple Inc.".to_string(),
                    price: 145.23,
                },
                InstrumentSpec {
                    symbol: "MSFT".to_string(),
                    name: "Microsoft Corporation".to_string(),
                    price: 265.12,
                },
                InstrumentSpec {
                    symbol: "GOOGL".to_string(),
                    name: "Alphabet Inc.".to_string(),
                    price: 2080.01,
                },
            ],
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> SimulationConfig {
        let mut config = SimulationConfig::default();

        if let Ok(balance) = std::env::var("STARTING_BALANCE") {
            match balance.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => {
                    config.starting_balance = value;
                }
                Ok(value) => {
                    tracing::warn!(
                        "Invalid STARTING_BALANCE value: {} (must be non-negative and finite), using default: {}",
                        value,
                        config.starting_balance
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse STARTING_BALANCE '{}': {}, using default: {}",
                        balance,
                        e,
                        config.starting_balance
                    );
                }
            }
        }

        config
    }

    /// Build the configured instruments as domain entities.
    pub fn build_instruments(&self) -> Result<Vec<Instrument>, ValidationError> {
        self.instruments
            .iter()
            .map(|spec| Instrument::new(&spec.symbol, &spec.name, spec.price))
            .collect()
    }
}
