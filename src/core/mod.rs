pub mod context;
pub mod registry;
pub mod runner;

pub use crate::domain::model::{FlowRun, FlowRunId, FlowRunState};
pub use crate::domain::ports::{Console, Flow, LogSink};
pub use crate::utils::error::Result;
