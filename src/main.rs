mod config;
mod domain;

use crate::domain::entities::account::{Account, TradeReceipt};
use crate::domain::errors::TradeError;
use crate::domain::services::reporting;
use crate::domain::value_objects::share_count::ShareCount;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn report_trade(outcome: Result<TradeReceipt, TradeError>) {
    match outcome {
        Ok(receipt) => println!("{}", reporting::render_receipt(&receipt)),
        Err(error) => println!("{}", reporting::render_trade_error(&error)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "papertrade=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::SimulationConfig::from_env();
    let instruments = config.build_instruments()?;
    let apple = &instruments[0];
    let microsoft = &instruments[1];
    let google = &instruments[2];

    info!(
        starting_balance = config.starting_balance,
        instruments = instruments.len(),
        "simulation configured"
    );

    let mut user1 = Account::new("John Doe", 25, config.starting_balance);
    let mut user2 = Account::new("Jane Smith", 30, config.starting_balance);

    report_trade(user1.buy(apple, ShareCount::new(5)));
    report_trade(user1.buy(microsoft, ShareCount::new(2)));

    report_trade(user2.buy(google, ShareCount::new(3)));
    report_trade(user2.buy(microsoft, ShareCount::new(4)));

    report_trade(user1.sell(apple, ShareCount::new(2)));
    report_trade(user2.sell(microsoft, ShareCount::new(3)));

    println!();
    println!("{}", reporting::render_portfolio(&user1));
    println!();
    println!("{}", reporting::render_portfolio(&user2));
    println!();
    println!("{}", reporting::render_balance(&user1));
    println!("{}", reporting::render_balance(&user2));

    Ok(())
}
