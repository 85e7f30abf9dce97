use crate::utils::error::{FlowError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: Option<RunSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSection {
    pub flow: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed)
            .map_err(|e| FlowError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| FlowError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn flow_name(&self) -> Option<&str> {
        self.run.as_ref().and_then(|r| r.flow.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.format.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[run]
flow = "hello_flow"

[logging]
level = "warn"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.flow_name(), Some("hello_flow"));
        assert_eq!(config.log_level(), Some("warn"));
        assert_eq!(config.log_format(), Some("json"));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.flow_name().is_none());
        assert!(config.log_level().is_none());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("HELLO_FLOW_TEST_FLOW", "from_env");
        let config = TomlConfig::from_toml_str(
            "[run]\nflow = \"${HELLO_FLOW_TEST_FLOW}\"\n[logging]\nlevel = \"${HELLO_FLOW_UNSET_VAR}\"",
        )
        .unwrap();

        assert_eq!(config.flow_name(), Some("from_env"));
        assert_eq!(config.log_level(), Some("${HELLO_FLOW_UNSET_VAR}"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[run\nflow =").unwrap_err();
        assert!(matches!(err, FlowError::ConfigError { .. }));
    }
}
