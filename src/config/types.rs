use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for doclink
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Document discovery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Root directory to scan recursively
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

/// Reachability probe configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Total time budget for a single probe (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Time budget for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of probes in flight at once
    #[serde(rename = "max-concurrent-probes", default = "default_max_concurrent_probes")]
    pub max_concurrent_probes: usize,

    /// User agent string sent with every probe
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Link filter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Drop targets with a mailto scheme
    #[serde(rename = "exclude-mailto", default = "default_exclude_mailto")]
    pub exclude_mailto: bool,

    /// Drop targets containing any of these domain substrings
    #[serde(rename = "excluded-domains", default = "default_excluded_domains")]
    pub excluded_domains: Vec<String>,
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Path of the HTML report artifact
    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: PathBuf,

    /// Open the report in the default viewer after writing it
    #[serde(rename = "open-after-write", default = "default_open_after_write")]
    pub open_after_write: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_max_concurrent_probes() -> usize {
    32
}

fn default_user_agent() -> String {
    format!("doclink/{}", env!("CARGO_PKG_VERSION"))
}

fn default_exclude_mailto() -> bool {
    true
}

fn default_excluded_domains() -> Vec<String> {
    // The relationship schema's self-referential documentation URL shows up
    // as vendor boilerplate in generated documents.
    vec!["office.microsoft.com".to_string()]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("report.html")
}

fn default_open_after_write() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_concurrent_probes: default_max_concurrent_probes(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_mailto: default_exclude_mailto(),
            excluded_domains: default_excluded_domains(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            open_after_write: default_open_after_write(),
        }
    }
}
