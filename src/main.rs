use clap::Parser;
use hanoi::adapters::sink_for;
use hanoi::config::input::read_disk_count;
use hanoi::core::ConfigProvider;
use hanoi::utils::{logger, validation};
use hanoi::{CliConfig, SolveEngine, SolveSummary};
use std::io::IsTerminal;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌 (寫到 stderr)
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(summary) => {
            tracing::debug!(
                "Solved {} disks in {} moves (verified: {})",
                summary.disks,
                summary.moves,
                summary.verified
            );
        }
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("Output closed by reader, stopping early");
        }
        Err(e) => {
            tracing::error!(
                "❌ Solve failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig) -> hanoi::Result<SolveSummary> {
    let settings = config.resolve()?;

    let disks = match settings.disks() {
        Some(disks) => disks,
        None => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            let mut stderr = std::io::stderr();
            let disks = read_disk_count(&mut stdin.lock(), interactive.then_some(&mut stderr))?;
            validation::validate_disk_limit(disks, settings.max_disks())?;
            disks
        }
    };

    let sink = sink_for(settings.output_format(), std::io::stdout().lock());
    let mut engine = SolveEngine::new(sink, settings.rods()?)
        .with_verification(settings.verify())
        .with_monitoring(settings.monitoring_enabled());

    engine.run(disks)
}
