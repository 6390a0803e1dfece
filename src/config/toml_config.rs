use crate::core::SortBy;
use crate::utils::error::{RingError, Result};
use crate::utils::validation::{validate_one_of, validate_path, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./data/boxers.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub ring: RingConfig,
    pub leaderboard: LeaderboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// "json" or "memory"
    pub backend: String,
    pub path: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "json".to_string(),
            path: Some(DEFAULT_STORE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub default_sort: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_sort: SortBy::Wins.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// "compact" or "json"
    pub format: String,
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        // 匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_sort(&self) -> Result<SortBy> {
        self.leaderboard.default_sort.parse()
    }

    pub fn uses_json_store(&self) -> bool {
        self.store.backend == "json"
    }

    pub fn store_path(&self) -> Result<&str> {
        validate_required_field("store.path", &self.store.path).map(String::as_str)
    }

    /// 記憶體 catalog 每次執行都是空的，只能用來建立 boxer
    pub fn check_backend_for(&self, reads_catalog: bool) -> Result<()> {
        if reads_catalog && !self.uses_json_store() {
            return Err(RingError::ConfigValidationError {
                field: "store.backend".to_string(),
                message: "The memory backend starts empty on every run; use the json backend for this command".to_string(),
            });
        }
        Ok(())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        // 驗證儲存設定
        validate_one_of("store.backend", &self.store.backend, &["json", "memory"])?;
        if self.uses_json_store() {
            validate_path("store.path", self.store_path()?)?;
        }

        // 驗證排序與日誌格式
        validate_one_of(
            "leaderboard.default_sort",
            &self.leaderboard.default_sort,
            &["wins", "win_pct"],
        )?;
        validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;
        Ok(())
    }
}
