use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use task_tracker_core::{connect, StoreArgs, TaskService};
use task_tracker_web::{router, AppState};

#[derive(Parser)]
#[command(name = "task-tracker-web")]
#[command(about = "Web pages and JSON API for the task tracker", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    /// Address to listen on
    #[arg(long, env = "TASK_TRACKER_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let repo = connect(&cli.store.into_config())
        .await
        .context("could not set up the task table client")?;
    let state = AppState::new(TaskService::new(repo)).context("failed to load page templates")?;

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
