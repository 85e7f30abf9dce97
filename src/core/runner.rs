use crate::core::context::RunContext;
use crate::core::registry::FlowRegistry;
use crate::domain::model::FlowRun;
use crate::domain::ports::{Console, Flow, LogSink};
use crate::utils::error::{FlowError, Result};
use std::sync::Arc;

/// Executes flows one run at a time. Holds no state between runs.
pub struct FlowRunner {
    sink: Arc<dyn LogSink>,
    console: Arc<dyn Console>,
}

impl FlowRunner {
    pub fn new<S, C>(sink: S, console: C) -> Self
    where
        S: LogSink + 'static,
        C: Console + 'static,
    {
        Self {
            sink: Arc::new(sink),
            console: Arc::new(console),
        }
    }

    pub async fn run(&self, flow: &dyn Flow) -> Result<FlowRun> {
        let mut run = FlowRun::pending(flow.name());
        let ctx = RunContext::new(run.info(), self.sink.clone(), self.console.clone());

        run.mark_running();
        tracing::debug!(flow = %run.flow_name, run_id = %run.id, "Flow run started");

        match flow.run(&ctx).await {
            Ok(()) => {
                run.mark_completed();
                tracing::debug!(flow = %run.flow_name, run_id = %run.id, "Flow run completed");
                log_summary(&run);
                Ok(run)
            }
            Err(e) => {
                run.mark_failed(e.to_string());
                tracing::error!(
                    flow = %run.flow_name,
                    run_id = %run.id,
                    "Flow run failed: {}",
                    e
                );
                log_summary(&run);
                Err(FlowError::RunFailed {
                    run: Box::new(run),
                    message: e.to_string(),
                })
            }
        }
    }

    pub async fn run_by_name(&self, registry: &FlowRegistry, name: &str) -> Result<FlowRun> {
        let flow = registry.get(name)?;
        self.run(flow.as_ref()).await
    }
}

fn run_summary(run: &FlowRun) -> Result<String> {
    Ok(serde_json::to_string(run)?)
}

fn log_summary(run: &FlowRun) {
    match run_summary(run) {
        Ok(summary) => tracing::debug!("Run summary: {}", summary),
        Err(e) => tracing::warn!(run_id = %run.id, "Could not serialize run summary: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryTranscript;
    use crate::domain::model::{Emission, FlowRunState};
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl Flow for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn run(&self, ctx: &RunContext) -> Result<()> {
            ctx.get_run_logger().info("about to fail")?;
            Err(FlowError::config("no upstream"))
        }
    }

    struct Silent;

    #[async_trait]
    impl Flow for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        async fn run(&self, _ctx: &RunContext) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_successful_run_is_completed() {
        let transcript = MemoryTranscript::new();
        let runner = FlowRunner::new(transcript.clone(), transcript.clone());

        let run = runner.run(&Silent).await.unwrap();

        assert_eq!(run.state, FlowRunState::Completed);
        assert_eq!(run.flow_name, "silent");
        assert!(run.started_at.is_some());
        assert!(run.finished_at.is_some());
        // lifecycle logging goes to tracing, never to the run logger
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn test_failing_run_reports_run_failed() {
        let transcript = MemoryTranscript::new();
        let runner = FlowRunner::new(transcript.clone(), transcript.clone());

        let err = runner.run(&Failing).await.unwrap_err();

        match err {
            FlowError::RunFailed { run, message } => {
                assert_eq!(run.flow_name, "failing");
                assert!(run.id.as_str().starts_with("failing-"));
                assert_eq!(run.state, FlowRunState::Failed);
                assert!(run.started_at.is_some());
                assert!(run.finished_at.is_some());
                assert_eq!(run.message.as_deref(), Some(message.as_str()));
                assert!(message.contains("no upstream"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            transcript.emissions(),
            vec![Emission::Log {
                level: crate::domain::model::LogLevel::Info,
                message: "about to fail".to_string()
            }]
        );
    }

    #[test]
    fn test_failed_run_summary_keeps_state_and_message() {
        let mut run = FlowRun::pending("failing");
        run.mark_running();
        run.mark_failed("no upstream");

        let summary: serde_json::Value =
            serde_json::from_str(&run_summary(&run).unwrap()).unwrap();
        assert_eq!(summary["state"], "failed");
        assert_eq!(summary["message"], "no upstream");
        assert!(!summary["finished_at"].is_null());
    }

    #[tokio::test]
    async fn test_run_by_name_unknown_flow() {
        let transcript = MemoryTranscript::new();
        let runner = FlowRunner::new(transcript.clone(), transcript.clone());
        let registry = FlowRegistry::new();

        let err = runner.run_by_name(&registry, "ghost").await.unwrap_err();
        assert!(matches!(err, FlowError::UnknownFlow { .. }));
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn test_each_run_gets_a_fresh_id() {
        let transcript = MemoryTranscript::new();
        let runner = FlowRunner::new(transcript.clone(), transcript);

        let first = runner.run(&Silent).await.unwrap();
        let second = runner.run(&Silent).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
