//! One-off conversion tool.
//!
//! Runs the same conversion pipeline as `POST /api/convert-text` without
//! starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Convert links given as an argument
//! cargo run --bin convert -- "xem nè shopee.vn/product/111/222"
//!
//! # Attach sub ids
//! cargo run --bin convert -- --sub-id camp1 --sub-id fb "shp.ee/abc"
//!
//! # Read from stdin, print JSON
//! cat message.txt | cargo run --bin convert -- --json
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`APP_ID`, `APP_SECRET`, `AFF_ID`, `REDIS_URL`, ...).
//! Metadata lookups are skipped when partner credentials are missing.

use affiliate_link_converter::api::dto::convert::ConvertResponse;
use affiliate_link_converter::config;
use affiliate_link_converter::domain::entities::ConversionResult;
use affiliate_link_converter::server::{build_state, connect_cache};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Read;
use tracing_subscriber::EnvFilter;

/// Converts marketplace links in text into affiliate tracking links.
#[derive(Parser)]
#[command(name = "convert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sub id appended to every tracking link (repeatable)
    #[arg(short, long = "sub-id", value_name = "ID")]
    sub_ids: Vec<String>,

    /// Print the API response JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Text containing links (read from stdin when omitted)
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_from_env()?;

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if text.trim().is_empty() {
        anyhow::bail!("Text is empty");
    }

    let cache = connect_cache(&config).await;
    let state = build_state(&config, cache)?;

    let results = state
        .conversion_service
        .convert_text(&text, &cli.sub_ids)
        .await;

    if cli.json {
        let response = ConvertResponse::from_results(results);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_results(&results);
    }

    Ok(())
}

/// Prints results as a colored list.
///
/// # Output Format
///
/// ```text
/// 🔗 Converted 1 link
///
///   shopee.vn/product/111/222
///     Product: Áo thun
///     Short:   https://s.shopee.vn/an_redir?origin_link=...
///     Image:   https://cf.shopee.vn/file/...
/// ```
fn print_results(results: &[ConversionResult]) {
    if results.is_empty() {
        println!("{}", "⚠️  No marketplace links found".yellow());
        return;
    }

    let noun = if results.len() == 1 { "link" } else { "links" };
    println!(
        "{}",
        format!("🔗 Converted {} {}", results.len(), noun)
            .bright_blue()
            .bold()
    );
    println!();

    for result in results {
        println!("  {}", result.original.cyan());
        println!("    Product: {}", result.product_name.bright_white());
        println!("    Short:   {}", result.tracking_link.bright_yellow());
        if !result.image_url.is_empty() {
            println!("    Image:   {}", result.image_url.bright_black());
        }
        println!();
    }
}
