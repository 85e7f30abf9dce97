use crate::domain::model::{LogLevel, RunInfo};
use crate::domain::ports::LogSink;
use crate::utils::error::Result;

/// Run-logger sink that forwards records to `tracing`, tagged with the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, run: &RunInfo, level: LogLevel, message: &str) -> Result<()> {
        let flow = run.flow_name.as_str();
        let run_id = run.run_id.as_str();
        match level {
            LogLevel::Debug => tracing::debug!(flow, run_id, "{}", message),
            LogLevel::Info => tracing::info!(flow, run_id, "{}", message),
            LogLevel::Warn => tracing::warn!(flow, run_id, "{}", message),
            LogLevel::Error => tracing::error!(flow, run_id, "{}", message),
        }
        Ok(())
    }
}
