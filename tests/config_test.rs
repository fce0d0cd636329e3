#![cfg(feature = "cli")]

use small_hr::utils::validation::Validate;
use small_hr::{CliConfig, SettingsProvider};

#[test]
fn test_cli_config_validation() {
    let config = CliConfig {
        minimum_wage: 1500.0,
        settings_file: None,
        verbose: false,
    };
    assert!(config.validate().is_ok());

    let settings = config.payroll_settings().unwrap();
    assert_eq!(settings.minimum_wage(), 1500.0);
}

#[test]
fn test_cli_config_rejects_wage_above_cap() {
    let config = CliConfig {
        minimum_wage: 3500.0,
        settings_file: None,
        verbose: false,
    };
    assert!(config.validate().is_err());
    assert!(config.payroll_settings().is_err());
}

#[test]
fn test_cli_config_rejects_negative_wage() {
    let config = CliConfig {
        minimum_wage: -100.0,
        settings_file: None,
        verbose: false,
    };
    assert!(config.validate().is_err());
}
