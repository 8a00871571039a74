use crate::utils::error::{Result, StackError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub host: Option<String>,
    pub api_version: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StackError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StackError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ENGINE_TOKEN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StackError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_client_section() {
        let toml_content = r#"
[client]
host = "http://engine.internal:2375"
api_version = "1.43"
timeout_seconds = 15

[client.headers]
Authorization = "Bearer abc"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.client.host.as_deref(),
            Some("http://engine.internal:2375")
        );
        assert_eq!(config.client.api_version.as_deref(), Some("1.43"));
        assert_eq!(config.client.timeout_seconds, Some(15));
        assert_eq!(
            config.client.headers.unwrap().get("Authorization").unwrap(),
            "Bearer abc"
        );
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.client.host.is_none());
        assert!(config.client.headers.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STACKCTL_TEST_ENGINE_HOST", "http://10.1.2.3:2375");

        let toml_content = r#"
[client]
host = "${STACKCTL_TEST_ENGINE_HOST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.client.host.as_deref(), Some("http://10.1.2.3:2375"));

        std::env::remove_var("STACKCTL_TEST_ENGINE_HOST");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let toml_content = r#"
[client]
host = "${STACKCTL_TEST_DEFINITELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.client.host.as_deref(),
            Some("${STACKCTL_TEST_DEFINITELY_UNSET}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[client\nhost = 1").unwrap_err();
        assert!(matches!(err, StackError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[client]\napi_version = \"1.41\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.client.api_version.as_deref(), Some("1.41"));
    }
}
