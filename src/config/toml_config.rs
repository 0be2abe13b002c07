use crate::config::{validate_provider, DEFAULT_BASE_URL, DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH};
use crate::core::loader::{DEFAULT_PROFILE_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::core::shell::DEFAULT_STYLESHEET;
use crate::core::ConfigProvider;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: Option<String>,
    pub profile_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub stylesheet: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: Option<String>,
    pub output_file: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProfileError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProfileError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROFILE_BASE_URL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProfileError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.site.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn profile_path(&self) -> &str {
        self.site
            .profile_path
            .as_deref()
            .unwrap_or(DEFAULT_PROFILE_PATH)
    }

    fn output_path(&self) -> &str {
        self.output
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_file(&self) -> &str {
        self.output
            .output_file
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    fn stylesheet(&self) -> &str {
        self.site.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET)
    }

    fn timeout_seconds(&self) -> u64 {
        self.site.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn year(&self) -> Option<i32> {
        self.site.year
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
