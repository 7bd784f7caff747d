//! Handler Talk - command line entry point
//!
//! Handles every command-line argument in the background and prints one
//! line per outcome, in the order the outcomes arrive.

use anyhow::{bail, Result};
use clap::Parser;
use handler_talk::{
    recv_outcome, result_channel, AsyncHandler, Config, Handler, LogSender, Outcome,
    RequestHandler, Sender,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "handler-talk", about = "Handle messages in the background and print their outcomes")]
struct Cli {
    /// Messages to handle; an empty string is rejected, a trailing `?` is slow
    #[arg(required = true)]
    messages: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr; stdout carries the outcomes
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let inputs = cli.messages;

    let sender = Arc::new(LogSender::new(config.sender_url.clone())) as Arc<dyn Sender>;
    let handler = Arc::new(RequestHandler::from_config(&config, sender)) as Arc<dyn Handler>;

    let (results, mut outcomes) = result_channel();
    let async_handler = AsyncHandler::from_config(&config, handler, results);

    info!(
        "Handling {} message(s) as {}",
        inputs.len(),
        config.handler_name
    );

    for input in &inputs {
        async_handler.handle(input);
    }

    let mut failures = 0;
    for _ in &inputs {
        match recv_outcome(&mut outcomes, config.result_timeout()).await? {
            Outcome::Success => println!("ok"),
            Outcome::Failure(err) => {
                failures += 1;
                println!("error: {}", err);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} message(s) failed", failures, inputs.len());
    }

    info!("All messages handled");
    Ok(())
}
