use papertrade::config::SimulationConfig;
use papertrade::domain::entities::account::{Account, TradeSide};
use papertrade::domain::errors::TradeError;
use papertrade::domain::services::reporting;
use papertrade::domain::value_objects::share_count::ShareCount;

#[test]
fn test_end_to_end_demo_script_output() {
    let config = SimulationConfig::default();
    let instruments = config.build_instruments().unwrap();
    let (apple, microsoft, google) = (&instruments[0], &instruments[1], &instruments[2]);

    let mut user1 = Account::new("John Doe", 25, config.starting_balance);
    let mut user2 = Account::new("Jane Smith", 30, config.starting_balance);

    let mut lines = Vec::new();
    for outcome in [
        user1.buy(apple, ShareCount::new(5)),
        user1.buy(microsoft, ShareCount::new(2)),
        user2.buy(google, ShareCount::new(3)),
        user2.buy(microsoft, ShareCount::new(4)),
        user1.sell(apple, ShareCount::new(2)),
        user2.sell(microsoft, ShareCount::new(3)),
    ] {
        let line = match outcome {
            Ok(receipt) => reporting::render_receipt(&receipt),
            Err(error) => reporting::render_trade_error(&error),
        };
        lines.push(line);
    }

    assert_eq!(
        lines,
        vec![
            "Successfully bought 5 shares of Apple Inc.",
            "Successfully bought 2 shares of Microsoft Corporation.",
            "Successfully bought 3 shares of Alphabet Inc.",
            "Successfully bought 4 shares of Microsoft Corporation.",
            "Successfully sold 2 shares of Apple Inc.",
            "Successfully sold 3 shares of Microsoft Corporation.",
        ]
    );

    assert_eq!(
        reporting::render_portfolio(&user1),
        "Portfolio of John Doe:\nApple Inc.: 3 shares\nMicrosoft Corporation: 2 shares"
    );
    assert_eq!(
        reporting::render_portfolio(&user2),
        "Portfolio of Jane Smith:\nAlphabet Inc.: 3 shares\nMicrosoft Corporation: 1 shares"
    );

    assert_eq!(
        reporting::render_balance(&user1),
        "Balance of John Doe: $9034.07"
    );
    assert_eq!(
        reporting::render_balance(&user2),
        "Balance of Jane Smith: $3494.85"
    );
}

#[test]
fn test_overdrawn_account_keeps_trading() {
    let config = SimulationConfig::default();
    let instruments = config.build_instruments().unwrap();
    let google = &instruments[2];

    let mut account = Account::new("John Doe", 25, 100.0);

    // Rejected buy, then a rejected sell of the same instrument
    let buy = account.buy(google, ShareCount::new(1));
    assert!(matches!(buy, Err(TradeError::InsufficientFunds { .. })));

    let sell = account.sell(google, ShareCount::new(1));
    assert!(matches!(sell, Err(TradeError::NoPosition { .. })));

    // The account is still usable afterwards
    let apple = &instruments[0];
    let mut cheap = Account::new("Jane Smith", 30, 200.0);
    let receipt = cheap.buy(apple, ShareCount::new(1)).unwrap();
    assert_eq!(receipt.side, TradeSide::Buy);
    assert_eq!(account.balance(), 100.0);
}

#[test]
fn test_receipts_and_errors_round_trip_through_json() {
    let config = SimulationConfig::default();
    let instruments = config.build_instruments().unwrap();
    let mut account = Account::new("John Doe", 25, config.starting_balance);

    let receipt = account.buy(&instruments[0], ShareCount::new(5)).unwrap();
    let json = serde_json::to_string(&receipt).unwrap();
    let parsed: papertrade::domain::entities::account::TradeReceipt =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, receipt);

    let error = account
        .sell(&instruments[1], ShareCount::new(1))
        .unwrap_err();
    let json = serde_json::to_string(&error).unwrap();
    let parsed: TradeError = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, error);
}

#[test]
fn test_starting_balance_from_config_applies_to_accounts() {
    let mut config = SimulationConfig::default();
    config.starting_balance = 500.0;

    let account = Account::new("Jane Smith", 30, config.starting_balance);
    assert_eq!(account.balance(), 500.0);
}
