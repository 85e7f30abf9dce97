pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::app::flows::hello_flow::FLOW_NAME;
use crate::utils::error::Result;
use crate::utils::validation::{validate_flow_name, validate_one_of, Validate};

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hello-flow")]
#[command(about = "Run a registered flow once")]
pub struct CliConfig {
    #[arg(long, help = "Name of the flow to run [default: hello_flow]")]
    pub flow: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "List registered flows and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub flow: String,
    pub log_level: String,
    pub log_format: String,
    pub verbose: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            flow: FLOW_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: "compact".to_string(),
            verbose: false,
        }
    }
}

impl RunSettings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            flow: file.flow_name().map(str::to_string).unwrap_or(defaults.flow),
            log_level: file
                .log_level()
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            log_format: file
                .log_format()
                .map(str::to_string)
                .unwrap_or(defaults.log_format),
            verbose: defaults.verbose,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// CLI flags win over the file; the file wins over defaults.
    pub fn resolve(&self) -> Result<RunSettings> {
        let mut settings = match &self.config {
            Some(path) => RunSettings::from_toml(&TomlConfig::from_file(path)?),
            None => RunSettings::default(),
        };

        if let Some(flow) = &self.flow {
            settings.flow = flow.clone();
        }
        if self.json_logs {
            settings.log_format = "json".to_string();
        }
        settings.verbose = self.verbose;

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_flow_name("run.flow", &self.flow)?;
        validate_one_of("logging.level", &self.log_level, &LOG_LEVELS)?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}
