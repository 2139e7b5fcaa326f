use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let mut config: Config = toml::from_str(&content)?;

    // A file that lowers the total timeout must not be rejected because the
    // compiled-in connect-timeout default sits above it
    config.probe.connect_timeout_secs = config
        .probe
        .connect_timeout_secs
        .min(config.probe.timeout_secs);

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Loads a configuration file if one was given, otherwise returns defaults
///
/// The compiled-in defaults always pass validation, so the no-config path
/// cannot fail.
pub fn load_config_or_default(path: Option<&Path>) -> ConfigResult<Config> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[scan]
root = "./docs"

[probe]
timeout-secs = 10
max-concurrent-probes = 8
user-agent = "doclink-test/1.0"

[filter]
exclude-mailto = false
excluded-domains = ["office.microsoft.com", "example.invalid"]

[report]
output-path = "./out/report.html"
open-after-write = false
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scan.root, PathBuf::from("./docs"));
        assert_eq!(config.probe.timeout_secs, 10);
        assert_eq!(config.probe.max_concurrent_probes, 8);
        assert!(!config.filter.exclude_mailto);
        assert_eq!(config.filter.excluded_domains.len(), 2);
        assert!(!config.report.open_after_write);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let file = create_temp_config("[probe]\ntimeout-secs = 3\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.probe.timeout_secs, 3);
        assert_eq!(config.scan.root, PathBuf::from("."));
        assert!(config.filter.exclude_mailto);
        assert_eq!(config.report.output_path, PathBuf::from("report.html"));
    }

    #[test]
    fn test_connect_timeout_clamped_to_total_timeout() {
        let file = create_temp_config("[probe]\ntimeout-secs = 3\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.probe.timeout_secs, 3);
        assert_eq!(config.probe.connect_timeout_secs, 3);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/doclink.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[probe]\ntimeout-secs = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_no_config_path_yields_defaults() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.probe.timeout_secs, 5);
        assert_eq!(config.probe.max_concurrent_probes, 32);
    }
}
