use crate::domain::model::{FlowRunId, LogLevel, RunInfo};
use crate::domain::ports::{Console, LogSink};
use crate::utils::error::Result;
use std::sync::Arc;

/// Logger bound to a single flow run.
#[derive(Clone)]
pub struct RunLogger {
    run: RunInfo,
    sink: Arc<dyn LogSink>,
}

impl RunLogger {
    pub(crate) fn new(run: RunInfo, sink: Arc<dyn LogSink>) -> Self {
        Self { run, sink }
    }

    pub fn log(&self, level: LogLevel, message: &str) -> Result<()> {
        self.sink.log(&self.run, level, message)
    }

    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.log(LogLevel::Error, message)
    }
}

/// Everything a flow sees of its run. Only the runner builds one, so a run
/// logger cannot exist outside an active run.
pub struct RunContext {
    run: RunInfo,
    logger: RunLogger,
    console: Arc<dyn Console>,
}

impl RunContext {
    pub(crate) fn new(run: RunInfo, sink: Arc<dyn LogSink>, console: Arc<dyn Console>) -> Self {
        let logger = RunLogger::new(run.clone(), sink);
        Self {
            run,
            logger,
            console,
        }
    }

    pub fn get_run_logger(&self) -> &RunLogger {
        &self.logger
    }

    pub fn print(&self, line: &str) -> Result<()> {
        self.console.print(line)
    }

    pub fn run_id(&self) -> &FlowRunId {
        &self.run.run_id
    }

    pub fn flow_name(&self) -> &str {
        &self.run.flow_name
    }
}
