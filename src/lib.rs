//! Minimal in-process flow runtime and the `hello_flow` flow.
//!
//! Flows are registered by name, run once per call, and get a run context
//! carrying a run logger. Linking this crate runs nothing.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryTranscript, StdoutConsole, TracingSink};
pub use app::flows::HelloFlow;
pub use config::{RunSettings, TomlConfig};
pub use crate::core::context::{RunContext, RunLogger};
pub use crate::core::registry::FlowRegistry;
pub use crate::core::runner::FlowRunner;
pub use domain::model::{Emission, FlowRun, FlowRunId, FlowRunState, LogLevel, RunInfo};
pub use domain::ports::{Console, Flow, LogSink};
pub use utils::error::{FlowError, Result};
