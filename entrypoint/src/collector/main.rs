use std::process::ExitCode;

use clap::Parser;
use common::stop::StopSignal;
use tracing::{error, info, warn};
use utils::{cli::Cli, logger::configure_logger, phases::run};

#[tokio::main]
async fn main() -> ExitCode {
    configure_logger();

    let cli = Cli::parse();
    let stop = StopSignal::new();

    let listener = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current item");
            listener.raise();
        }
    });

    // the browser api is blocking, keep it off the runtime threads
    let outcome = tokio::task::spawn_blocking(move || run(&cli, &stop)).await;

    match outcome {
        Ok(Ok(())) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            error!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("Collector task failed: {err}");
            ExitCode::FAILURE
        }
    }
}
