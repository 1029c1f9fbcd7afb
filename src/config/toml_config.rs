use crate::config::{ClientConfig, DEFAULT_TIMEOUT_MS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BlogError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BlogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| BlogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BLOG_API_URL})，未設定者保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Layers the file's values over `base`; keys absent from the file keep `base`'s value.
    pub fn apply_to(&self, base: ClientConfig) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone().unwrap_or(base.base_url),
            timeout: self
                .api
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(base.timeout),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(super::DEFAULT_BASE_URL)
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let base_url = validate_required_field("api.base_url", &self.api.base_url)?;
        if base_url.contains("${") {
            return Err(BlogError::InvalidConfigValueError {
                field: "api.base_url".to_string(),
                value: base_url.clone(),
                reason: "Unresolved environment variable".to_string(),
            });
        }
        ClientConfig::new(base_url.clone(), self.timeout()).validate()
    }
}
