#![forbid(unsafe_code)]

//! `sheets-bot-launcher` — runs the rides bot with its environment prepared.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sheets_bot_launcher::cli::{LaunchArgs, LogFormat};
use sheets_bot_launcher::launcher::BotExit;
use sheets_bot_launcher::{AppError, LaunchConfig, Launcher, Result};

fn main() -> Result<()> {
    let args = LaunchArgs::parse();
    init_tracing(args.log_format)?;

    let config = args.into_config()?;
    let propagate = config.propagate_exit_code;
    info!(command = %config.bot.display(), "launcher bootstrap");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Io(format!("failed to build tokio runtime: {err}")))?;
    let result = runtime.block_on(run(config));
    // A stdin read left pending by Ctrl-C at the prompt cannot be cancelled.
    runtime.shutdown_background();
    let exit = result?;

    if propagate {
        std::process::exit(exit.launcher_exit_code());
    }
    Ok(())
}

async fn run(config: LaunchConfig) -> Result<BotExit> {
    let launcher = Launcher::new(config);
    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    launcher.run(&mut console, input).await
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
