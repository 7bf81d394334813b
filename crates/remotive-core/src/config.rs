use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default job feed endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://remotive.com/api/remote-jobs";

/// Default CSV output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "remotive_jobs.csv";

/// HTTP client parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpOptions {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, body included.
    pub timeout_secs: u64,
    /// Optional `User-Agent` header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 120,
            user_agent: None,
        }
    }
}

impl HttpOptions {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/remotive-csv/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Job feed URL (http or https).
    pub endpoint: String,
    /// CSV destination path.
    pub output: PathBuf,
    /// Optional HTTP settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpOptions>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            http: None,
        }
    }
}

impl AppConfig {
    /// HTTP settings, falling back to defaults when the section is absent.
    pub fn http_options(&self) -> HttpOptions {
        self.http.clone().unwrap_or_default()
    }

    /// Replace the endpoint after checking it is a usable http(s) URL.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        validate_endpoint(endpoint)?;
        self.endpoint = endpoint.to_string();
        Ok(())
    }
}

/// Reject anything that is not an absolute http or https URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let parsed =
        url::Url::parse(endpoint).with_context(|| format!("invalid endpoint URL: {endpoint}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("unsupported endpoint scheme {other:?} in {endpoint}"),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("remotive-csv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    parse(&data).with_context(|| format!("parse config {}", path.display()))
}

/// Parse and validate a config.toml document.
pub fn parse(data: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(data)?;
    validate_endpoint(&cfg.endpoint)?;
    Ok(cfg)
}
