use gd_bot::{AppContext, ShutdownCoordinator, run_polling};
use gd_server::{ServerErrorResult, logger};

use std::sync::Arc;

use log::{error, info, warn};

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration; a missing bot token stops here
    let config = gd_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gitdrop v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let ctx = Arc::new(AppContext::from_config(config)?);

    match ctx.github.current_login().await {
        Ok(login) => info!("GitHub account: {}", login),
        Err(e) => warn!("Could not resolve GitHub account, will retry on demand: {}", e),
    }

    let shutdown = ShutdownCoordinator::new();

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown_for_signal.shutdown(),
            Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    info!(
        "Bot is running for owner {} (cooldown {:?})",
        ctx.gate.owner_id(),
        ctx.gate.cooldown()
    );
    run_polling(ctx, shutdown.subscribe_guard()).await;

    info!("gitdrop stopped");
    Ok(())
}
