use crate::config::types::{Config, FilterConfig, ProbeConfig, ReportConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_probe_config(&config.probe)?;
    validate_filter_config(&config.filter)?;
    validate_report_config(&config.report)?;
    Ok(())
}

/// Validates probe configuration
fn validate_probe_config(config: &ProbeConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_concurrent_probes < 1 || config.max_concurrent_probes > 1024 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-probes must be between 1 and 1024, got {}",
            config.max_concurrent_probes
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for domain in &config.excluded_domains {
        if domain.trim().is_empty() {
            return Err(ConfigError::Validation(
                "excluded-domains entries cannot be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validates report configuration
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output-path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.probe.timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_connect_timeout_above_total_rejected() {
        let mut config = Config::default();
        config.probe.timeout_secs = 2;
        config.probe.connect_timeout_secs = 10;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = Config::default();
        config.probe.max_concurrent_probes = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_blank_excluded_domain_rejected() {
        let mut config = Config::default();
        config.filter.excluded_domains = vec!["  ".to_string()];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let mut config = Config::default();
        config.report.output_path = std::path::PathBuf::new();
        assert!(validate(&config).is_err());
    }
}
