//! Tests for the export configuration snapshot.

use super::*;

/// Ensures the default export settings match the published STL contract.
///
/// # Examples
/// ```
/// use config::constants::ExportConfig;
/// let cfg = ExportConfig::default();
/// assert_eq!(cfg.decimals, 6);
/// ```
#[test]
fn default_export_config_is_valid() {
    let cfg = ExportConfig::default();
    assert_eq!(cfg.solid_name, STL_SOLID_NAME);
    assert_eq!(cfg.decimals, STL_DECIMALS);
    assert_eq!(ExportConfig::new(STL_SOLID_NAME, STL_DECIMALS), Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ExportConfig::new("", 6).unwrap_err(),
        ConfigError::InvalidSolidName(String::new())
    );
    assert_eq!(
        ExportConfig::new("ring band", 6).unwrap_err(),
        ConfigError::InvalidSolidName("ring band".to_string())
    );
    assert_eq!(
        ExportConfig::new("ring", 0).unwrap_err(),
        ConfigError::InvalidDecimals(0)
    );
    assert_eq!(
        ExportConfig::new("ring", 13).unwrap_err(),
        ConfigError::InvalidDecimals(13)
    );
}

#[test]
fn config_error_messages_name_the_value() {
    let message = ConfigError::InvalidDecimals(13).to_string();
    assert!(message.contains("13"));
}
