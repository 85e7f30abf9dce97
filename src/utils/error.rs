use crate::domain::model::FlowRun;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Flow '{name}' is already registered")]
    DuplicateFlow { name: String },

    #[error("No flow registered under '{name}'")]
    UnknownFlow { name: String },

    /// Carries the finished run record in state `Failed`.
    #[error("Flow '{}' run {} failed: {}", .run.flow_name, .run.id, .message)]
    RunFailed { run: Box<FlowRun>, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Registration,
    Execution,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlowError {
    pub fn config(message: impl Into<String>) -> Self {
        FlowError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FlowError::ConfigError { .. } | FlowError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FlowError::DuplicateFlow { .. } | FlowError::UnknownFlow { .. } => {
                ErrorCategory::Registration
            }
            FlowError::RunFailed { .. } => ErrorCategory::Execution,
            FlowError::IoError(_) | FlowError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Registration => ErrorSeverity::Medium,
            ErrorCategory::Execution => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlowError::UnknownFlow { name } => format!("There is no flow called '{}'", name),
            FlowError::RunFailed { run, .. } => {
                format!("The flow '{}' did not finish", run.flow_name)
            }
            FlowError::ConfigError { .. } | FlowError::InvalidConfigValueError { .. } => {
                format!("The configuration is not usable: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FlowError::UnknownFlow { .. } => "Run with --list to see the registered flows",
            FlowError::DuplicateFlow { .. } => "Give each flow a unique name before registering it",
            FlowError::ConfigError { .. } | FlowError::InvalidConfigValueError { .. } => {
                "Check the config file and command line flags"
            }
            FlowError::RunFailed { .. } => "Re-run with --verbose to see the run lifecycle",
            FlowError::IoError(_) => "Check that stdout and the config path are writable/readable",
            FlowError::SerializationError(_) => "This is a bug; please report it",
        }
    }

    pub fn failed_run(&self) -> Option<&FlowRun> {
        match self {
            FlowError::RunFailed { run, .. } => Some(run.as_ref()),
            _ => None,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Registration => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
