use crate::core::context::RunContext;
use crate::domain::ports::Flow;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const FLOW_NAME: &str = "hello_flow";
pub const START_MESSAGE: &str = "Flow has started!";
pub const GREETING: &str = "Hello from Prefect flow!";
pub const COMPLETE_MESSAGE: &str = "Flow completed!";

/// Logs a start record, prints the greeting, logs a completion record.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloFlow;

impl HelloFlow {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Flow for HelloFlow {
    fn name(&self) -> &str {
        FLOW_NAME
    }

    async fn run(&self, ctx: &RunContext) -> Result<()> {
        let logger = ctx.get_run_logger();
        logger.info(START_MESSAGE)?;
        ctx.print(GREETING)?;
        logger.info(COMPLETE_MESSAGE)?;
        Ok(())
    }
}
