use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable holding the webhook endpoint.
pub const WEBHOOK_ENV_VAR: &str = "WEBHOOK_URL";

/// Value shipped in templates before a real endpoint is pasted in.
pub const WEBHOOK_PLACEHOLDER: &str = "YOUR_NEW_SLACK_APP_WEBHOOK_URL_HERE";

/// Names of the four required columns in the source table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnMap {
    #[serde(default = "default_date_column")]
    pub date: String,
    #[serde(default = "default_shift_column")]
    pub shift: String,
    #[serde(default = "default_driver_column")]
    pub driver: String,
    #[serde(default = "default_idle_column")]
    pub idle_time: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: default_date_column(),
            shift: default_shift_column(),
            driver: default_driver_column(),
            idle_time: default_idle_column(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_source_file")]
    pub source_file: String,
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default = "default_shift_separator")]
    pub shift_separator: String,
    #[serde(default = "default_late_shift_start_hour")]
    pub late_shift_start_hour: u32,
    #[serde(default = "default_benchmark")]
    pub benchmark_idle_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(default = "default_webhook_timeout")]
    pub webhook_timeout_secs: u64,
    #[serde(default = "default_message_delay")]
    pub message_delay_ms: u64,

    /// Decided once by [`Config::resolve_transport`], never read from disk.
    #[serde(skip)]
    pub transport_enabled: bool,
}

fn default_source_file() -> String {
    "data.csv".to_string()
}
fn default_date_column() -> String {
    "Start Time (Local)".to_string()
}
fn default_shift_column() -> String {
    "Shift Code".to_string()
}
fn default_driver_column() -> String {
    "Driver".to_string()
}
fn default_idle_column() -> String {
    "Idle Time".to_string()
}
fn default_shift_separator() -> String {
    "-".to_string()
}
fn default_late_shift_start_hour() -> u32 {
    20
}
fn default_benchmark() -> f64 {
    0.68
}
fn default_webhook_timeout() -> u64 {
    30
}
fn default_message_delay() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: default_source_file(),
            columns: ColumnMap::default(),
            shift_separator: default_shift_separator(),
            late_shift_start_hour: default_late_shift_start_hour(),
            benchmark_idle_time: default_benchmark(),
            webhook_url: None,
            webhook_timeout_secs: default_webhook_timeout(),
            message_delay_ms: default_message_delay(),
            transport_enabled: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ridlereport")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".ridlereport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ridlereport.conf")
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist. The webhook endpoint is resolved from the environment.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(WEBHOOK_ENV_VAR) {
            cfg.webhook_url = Some(url);
        }
        cfg.resolve_transport();
        cfg.validate()?;

        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.resolve_transport();
        Ok(cfg)
    }

    /// Decide whether outbound messages are actually posted.
    pub fn resolve_transport(&mut self) {
        self.transport_enabled = match &self.webhook_url {
            Some(url) => {
                let url = url.trim();
                !url.is_empty() && !url.contains(WEBHOOK_PLACEHOLDER)
            }
            None => false,
        };
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.late_shift_start_hour > 23 {
            return Err(AppError::Config(format!(
                "late_shift_start_hour must be between 0 and 23, got {}",
                self.late_shift_start_hour
            )));
        }
        if !self.benchmark_idle_time.is_finite() || self.benchmark_idle_time < 0.0 {
            return Err(AppError::Config(format!(
                "benchmark_idle_time must be a non-negative number, got {}",
                self.benchmark_idle_time
            )));
        }
        if self.shift_separator.is_empty() {
            return Err(AppError::Config("shift_separator cannot be empty".into()));
        }
        Ok(())
    }

    /// YAML rendering with the webhook endpoint masked.
    pub fn to_masked_yaml(&self) -> AppResult<String> {
        let mut shown = self.clone();
        shown.webhook_url = self.webhook_url.as_deref().map(mask_url);
        serde_yaml::to_string(&shown).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file. Returns false when a file is
    /// already present and `force` is not set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}

fn mask_url(url: &str) -> String {
    let keep: String = url.chars().take(24).collect();
    if keep.len() < url.len() {
        format!("{keep}…")
    } else {
        keep
    }
}
