// Configuration file parser

//! Configuration file parsing and validation
//!
//! This module handles loading TOML configuration files and validating
//! their contents before the detection loop starts.

use crate::scanner::validate_interface_name;
use crate::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load configuration from TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

    let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values
fn validate_config(config: &Config) -> Result<()> {
    // Validate SSID prefix not empty
    if config.general.ssid_prefix.is_empty() {
        anyhow::bail!("ssid_prefix cannot be empty");
    }

    // Validate cycle period is reasonable
    if config.general.period_millis == 0 {
        anyhow::bail!("period_millis must be > 0");
    }

    // Validate scan sink path is set
    if config.general.scan_file.as_os_str().is_empty() {
        anyhow::bail!("scan_file cannot be empty");
    }

    // Validate configured interface name if provided
    if let Some(ref iface) = config.general.interface {
        validate_interface_name(iface).context("Configured interface has invalid name")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneralConfig;
    use std::path::PathBuf;

    fn base_config() -> Config {
        Config {
            general: GeneralConfig {
                ssid_prefix: "PhoneArtifact".to_string(),
                suffix_len: 2,
                interface: None,
                scan_file: PathBuf::from("/run/ssid-scout/ssid_list.txt"),
                period_millis: 50,
                log_level: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&base_config()).is_ok());

        // Empty prefix
        let mut bad_config = base_config();
        bad_config.general.ssid_prefix = "".to_string();
        assert!(validate_config(&bad_config).is_err());

        // Zero period
        let mut bad_config = base_config();
        bad_config.general.period_millis = 0;
        assert!(validate_config(&bad_config).is_err());

        // Empty sink path
        let mut bad_config = base_config();
        bad_config.general.scan_file = PathBuf::new();
        assert!(validate_config(&bad_config).is_err());
    }

    #[test]
    fn test_validate_config_interface_name() {
        let mut config = base_config();
        config.general.interface = Some("wlan0".to_string());
        assert!(validate_config(&config).is_ok());

        config.general.interface = Some("wlan0; rm -rf /".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml_str = r#"
            [general]
            ssid_prefix = "PhoneArtifact"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(validate_config(&config).is_ok());

        // Defaults applied
        assert_eq!(config.general.suffix_len, 2);
        assert_eq!(config.general.period_millis, 50);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(
            config.general.scan_file,
            PathBuf::from("/run/ssid-scout/ssid_list.txt")
        );
        assert!(config.general.interface.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [general]
            ssid_prefix = "PhoneArtifact"
            suffix_len = 3
            interface = "wlp3s0"
            scan_file = "/tmp/scan.txt"
            period_millis = 1000
            log_level = "debug"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.general.suffix_len, 3);
        assert_eq!(config.general.interface.as_deref(), Some("wlp3s0"));
        assert_eq!(config.general.period_millis, 1000);
    }

    #[test]
    fn test_parse_missing_prefix_fails() {
        let toml_str = r#"
            [general]
            period_millis = 1000
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/ssid-scout.toml").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[general]\nssid_prefix = \"PhoneArtifact\"\nperiod_millis = 200\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.general.ssid_prefix, "PhoneArtifact");
        assert_eq!(config.general.period_millis, 200);
    }
}
