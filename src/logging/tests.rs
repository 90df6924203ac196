// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_tracing_mapping() {
    let levels: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().to_tracing_level())
        .collect();
    assert_eq!(
        levels,
        vec![
            None,
            Some(Level::ERROR),
            Some(Level::WARN),
            Some(Level::INFO),
            Some(Level::DEBUG),
            Some(Level::TRACE),
            Some(Level::TRACE),
        ]
    );
}

#[test]
fn test_filter_scopes_dependencies() {
    insta::assert_snapshot!(LogLevel::INFO.to_filter_string(), @"warn,gil_rs=info,gil=info");
    insta::assert_snapshot!(LogLevel::DUMP.to_filter_string(), @"trace");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let err = serde_json::from_str::<LogLevel>("7").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6"));
    assert_eq!(serde_json::from_str::<LogLevel>("4").unwrap(), LogLevel::DEBUG);
}
