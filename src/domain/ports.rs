use crate::core::context::RunContext;
use crate::domain::model::{LogLevel, RunInfo};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A named unit of work the runner can execute.
#[async_trait]
pub trait Flow: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, ctx: &RunContext) -> Result<()>;
}

/// Destination for run-logger records.
pub trait LogSink: Send + Sync {
    fn log(&self, run: &RunInfo, level: LogLevel, message: &str) -> Result<()>;
}

pub trait Console: Send + Sync {
    fn print(&self, line: &str) -> Result<()>;
}
