//! Integration tests that load configuration from on-disk fixture files and
//! feed the resulting default sets into the calculator state.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use steuer_core::calculations::{Advantage, DistributionMode};
use steuer_core::{HoldingField, HoldingState, ManagingDirectorState};
use steuer_ui::config::{AppConfig, ConfigError};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_overrides_defaults() {
    let config = AppConfig::load(Some(&fixture_path("custom_defaults.toml")))
        .expect("fixture file should load without error");

    assert_eq!(config.holding.dividend, dec!(500000));
    assert!(!config.holding.trade_tax_exempt);
    assert_eq!(config.holding.trade_tax_rate, dec!(0.16));
    // Untouched values keep their averages.
    assert_eq!(config.holding.corporate_tax_rate, dec!(0.15));

    assert_eq!(config.managing_director.gross_salary, dec!(250000));
    assert_eq!(config.managing_director.personal_tax_rate, dec!(0.45));
    assert!(config.managing_director.flat_tax_election);

    assert_eq!(config.window.width, 1280.0);
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
    assert!(!config.logging.stdout);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_loaded_defaults_drive_holding_state() {
    let config = AppConfig::load_from(&fixture_path("custom_defaults.toml")).unwrap();
    let mut state = HoldingState::new(config.holding);

    // 500000 × 5% = 25000; KSt 3750, Soli 206.25, GewSt 4000
    assert_eq!(state.result().total_tax, dec!(7956.25));

    state.set_use_defaults(false);
    state.set_value(HoldingField::Dividend, dec!(0)).unwrap();
    state.set_use_defaults(true);

    assert_eq!(state.value(HoldingField::Dividend), dec!(500000));
}

#[test]
fn test_loaded_defaults_drive_managing_director_state() {
    let config = AppConfig::load_from(&fixture_path("custom_defaults.toml")).unwrap();
    let state = ManagingDirectorState::new(config.managing_director);
    let result = state.result();

    assert_eq!(result.distribution.mode(), DistributionMode::FlatTax);
    assert_eq!(result.distribution.net, dec!(107250));
    // 250000 − 50000 SV − 90000 ESt − 4950 Soli − 7650 KiSt
    assert_eq!(result.salary.net, dec!(97400));
    assert_eq!(result.comparison.advantage, Advantage::Salary);
    assert_eq!(result.comparison.difference, dec!(9850));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = AppConfig::load(Some(&fixture_path("does_not_exist.toml")));

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_out_of_range_rate_is_rejected() {
    let result = AppConfig::load_from(&fixture_path("invalid_rate.toml"));

    match result {
        Err(ConfigError::Invalid { section, .. }) => assert_eq!(section, "holding"),
        other => panic!("expected invalid holding defaults, got {other:?}"),
    }
}
