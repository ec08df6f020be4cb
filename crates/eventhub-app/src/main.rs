//! EventHub application binary - composition root.
//!
//! 1. Install tracing
//! 2. Load configuration from TOML and apply its log level
//! 3. Run the requested command: `browse` renders the catalog with the
//!    selected filters, `chat` drives an assistant session from stdin

mod cli;
mod render;

use std::time::Duration;

use clap::Parser;
use eventhub_catalog::{BrowseView, Catalog};
use eventhub_chat::{ChatError, ChatSession};
use eventhub_core::config::EventHubConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::{BrowseArgs, CliArgs, Command};

fn run_browse(args: &BrowseArgs, config: &EventHubConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = args.resolve_catalog_path(config.catalog.source.as_deref());
    let catalog = Catalog::load_or_seed(source.as_deref())?;

    let mut view = BrowseView::new(args.sort.unwrap_or(config.catalog.default_sort));
    view.set_category(args.category);
    view.set_price_tier(args.price);
    view.set_query(args.query.as_str());

    let results = view.results(&catalog);
    tracing::info!(matched = results.len(), total = catalog.len(), "Browse complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No events match the current filters.");
    } else {
        for event in results {
            println!("{}", render::event_card(event));
        }
    }
    Ok(())
}

async fn run_chat(config: &EventHubConfig) -> Result<(), Box<dyn std::error::Error>> {
    let session = ChatSession::new(&config.chat);
    session.open().await;
    let reply_wait = Duration::from_millis(config.chat.reply_delay_ms.saturating_add(10));

    println!("Type a message. /open and /close toggle the panel, /quit exits.");
    let mut shown = render::print_new_messages(&session.messages().await, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/open" => {
                if session.open().await {
                    shown = 0;
                }
                shown = render::print_new_messages(&session.messages().await, shown);
                continue;
            }
            "/close" => {
                session.close().await;
                println!("(panel closed)");
                continue;
            }
            _ => {}
        }

        match session.send(&line).await {
            Ok(Some(_)) => {
                tokio::time::sleep(reply_wait).await;
                shown = render::print_new_messages(&session.messages().await, shown);
            }
            Ok(None) => {}
            Err(ChatError::PanelClosed) => println!("(panel is closed, type /open)"),
            Err(e) => return Err(e.into()),
        }
    }

    session.shutdown();
    tracing::info!(session = %session.id(), "Chat ended");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. RUST_LOG wins; otherwise start at the flag's level and
    // switch to the configured one once the config is read.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter.unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::new(args.bootstrap_log_level())
        }))
        .with_filter_reloading();
    let filter_handle = builder.reload_handle();
    builder.init();

    tracing::info!("Starting EventHub v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let config = EventHubConfig::load_or_default(&config_file);
    if !from_env {
        let log_level = args.resolve_log_level(&config.general.log_level);
        if let Err(e) = filter_handle.reload(tracing_subscriber::EnvFilter::new(&log_level)) {
            tracing::warn!(error = %e, "Failed to apply configured log level");
        }
    }

    match &args.command {
        Command::Browse(browse) => run_browse(browse, &config),
        Command::Chat => run_chat(&config).await,
    }
}
