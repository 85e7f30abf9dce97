use clap::Parser;
use hello_flow::utils::logger;
use hello_flow::{CliConfig, FlowRegistry, FlowRunner, StdoutConsole, TracingSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Listing needs no run settings, so a bad --flow or --config cannot block it.
    if cli.list {
        for name in FlowRegistry::with_builtin_flows()?.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if settings.json_logs() {
        logger::init_json_logger(settings.verbose, Some(settings.log_level.as_str()));
    } else {
        logger::init_cli_logger(settings.verbose, Some(settings.log_level.as_str()));
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let registry = FlowRegistry::with_builtin_flows()?;

    let runner = FlowRunner::new(TracingSink::new(), StdoutConsole::new());

    match runner.run_by_name(&registry, &settings.flow).await {
        Ok(run) => {
            tracing::debug!("Run {} finished in state {:?}", run.id, run.state);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
