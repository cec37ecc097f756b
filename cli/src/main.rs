mod menu;
mod view;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use task_tracker_core::{connect, StoreArgs, TaskService};

use crate::menu::{Menu, EXIT_CODE};

#[derive(Parser)]
#[command(name = "task-tracker")]
#[command(about = "Interactive task tracker backed by a DynamoDB table", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; keep them quiet by default so they don't interleave with prompts.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let repo = connect(&cli.store.into_config())
        .await
        .context("could not set up the task table client")?;
    let service = TaskService::new(repo);

    Menu::new(&service, io::stdin().lock(), io::stdout().lock())
        .run()
        .await
        .context("terminal I/O failed")?;

    Ok(ExitCode::from(EXIT_CODE))
}
