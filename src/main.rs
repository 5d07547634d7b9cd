//! Line-oriented front end: every line is a customer utterance, `:`-prefixed lines are
//! counter commands.

use anyhow::{Context, Result};
use cafe_assistant::config::CafeConfig;
use cafe_assistant::ingest;
use cafe_assistant::lifecycle::{setup_tracing, CafeSystem};
use cafe_assistant::model::money::format_price;
use cafe_assistant::model::Menu;
use cafe_assistant::reasoning::{OpenAiBackend, ReasoningBackend, RuleBasedBackend};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "cafe-assistant", version, about = "Café ordering assistant")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Menu file to load at startup (.txt, .md or .csv)
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Use the built-in keyword backend instead of a model endpoint
    #[arg(long)]
    offline: bool,
}

const HELP: &str = "Commands: :orders  :reset  :menu <path>  :quit";

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = CafeConfig::load(cli.config.as_deref()).context("loading config")?;
    let menu = match &cli.menu {
        Some(path) => initial_menu(path, &config, cli.offline).await?,
        None => Menu::default(),
    };

    let system = CafeSystem::from_config(&config, menu, cli.offline)?;
    info!(offline = cli.offline, "Assistant ready");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }
        if let Err(e) = handle_line(&system, line).await {
            error!(error = %e, "Request failed");
            println!("! {e}");
        }
    }

    system.shutdown().await?;
    Ok(())
}

async fn initial_menu(path: &Path, config: &CafeConfig, offline: bool) -> Result<Menu> {
    let backend: Box<dyn ReasoningBackend> = if offline {
        Box::new(RuleBasedBackend::new())
    } else {
        Box::new(OpenAiBackend::from_config(&config.reasoning)?)
    };
    let menu = ingest::load_menu(path, backend.as_ref())
        .await
        .with_context(|| format!("loading menu {}", path.display()))?;
    Ok(menu)
}

async fn handle_line(system: &CafeSystem, line: &str) -> Result<()> {
    match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
        (":orders", _) => {
            let orders = system.orders().await?;
            if orders.is_empty() {
                println!("No orders yet.");
            }
            for (n, order) in orders.iter().enumerate() {
                println!(
                    "{}. {} | {} | {} | {} each | total {}",
                    n + 1,
                    order.customer_name,
                    order.items,
                    order.customizations,
                    format_price(order.price_per_item),
                    format_price(order.order_total)
                );
            }
            if !orders.is_empty() {
                println!("Revenue: {}", format_price(system.revenue().await?));
            }
        }
        (":reset", _) => {
            let cleared = system.reset_orders().await?;
            println!("Cleared {cleared} orders.");
        }
        (":menu", path) if !path.is_empty() => {
            let items = system.upload_menu(Path::new(path)).await?;
            println!("Menu uploaded successfully! {items} items.");
        }
        (cmd, _) if cmd.starts_with(':') => println!("{HELP}"),
        _ => {
            let turn = system.voice_interaction(line).await?;
            println!("> {}", turn.reply);
            if let Some(audio) = turn.audio {
                println!("  [audio: {}]", audio.url());
            }
        }
    }
    Ok(())
}
