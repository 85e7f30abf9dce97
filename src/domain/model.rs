use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static RUN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowRunId(String);

impl FlowRunId {
    /// `<flow>-<utc timestamp>-<seq>`; the sequence keeps ids unique within a process.
    pub fn generate(flow_name: &str) -> Self {
        let seq = RUN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        Self(format!("{}-{}-{}", flow_name, stamp, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlowRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRunState {
    Pending,
    Running,
    Completed,
    Failed,
}

impl FlowRunState {
    pub fn is_final(&self) -> bool {
        matches!(self, FlowRunState::Completed | FlowRunState::Failed)
    }
}

/// Identity of a run, handed to log sinks with every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    pub run_id: FlowRunId,
    pub flow_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowRun {
    pub id: FlowRunId,
    pub flow_name: String,
    pub state: FlowRunState,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
}

impl FlowRun {
    pub fn pending(flow_name: &str) -> Self {
        Self {
            id: FlowRunId::generate(flow_name),
            flow_name: flow_name.to_string(),
            state: FlowRunState::Pending,
            started_at: None,
            finished_at: None,
            message: None,
        }
    }

    pub fn info(&self) -> RunInfo {
        RunInfo {
            run_id: self.id.clone(),
            flow_name: self.flow_name.clone(),
        }
    }

    pub fn mark_running(&mut self) {
        self.state = FlowRunState::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self) {
        self.state = FlowRunState::Completed;
        self.finished_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.state = FlowRunState::Failed;
        self.finished_at = Some(Utc::now());
        self.message = Some(message.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One observable output of a flow run, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Log { level: LogLevel, message: String },
    Print(String),
}
