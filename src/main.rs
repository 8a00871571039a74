use clap::Parser;
use stackctl::utils::{logger, shutdown, validation::Validate};
use stackctl::{run_list, CliConfig, Commands, EngineClient, StackCommands, StackError};

#[tokio::main]
async fn main() {
    // 參數錯誤由 clap 直接回報並結束，不會建立任何連線
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("Hint: {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}

async fn run(cli: CliConfig) -> Result<(), StackError> {
    let config = cli.client_config()?;
    config.validate()?;
    tracing::debug!(
        "Using engine API at {} (v{})",
        config.host,
        config.api_version
    );

    let client = EngineClient::new(config)?;
    let mut cancel = shutdown::shutdown_signal();

    match cli.command {
        Commands::Stack(StackCommands::Ls) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_list(&client, &mut out, &mut cancel).await
        }
    }
}
