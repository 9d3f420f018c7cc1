use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use fedicheck::ap::actor;
use fedicheck::ap::client::{ApClient, ACTIVITY_ACCEPT};
use fedicheck::ap::outbox;
use fedicheck::matrix::CompatMatrix;
use fedicheck::output;

/// Fedicheck: ActivityPub compatibility checker.
///
/// Fetches an actor document and its most recent note, then reports
/// which of the fields the major fediverse server families expect are
/// actually present.
#[derive(Parser)]
#[command(name = "fedicheck", version, about)]
struct Cli {
    /// Actor URL, e.g. https://example.social/users/alice
    #[arg(long)]
    actor: String,

    /// Max outbox items examined when looking for a representative note
    #[arg(long, default_value = "20")]
    outbox_limit: usize,

    /// Output CSV instead of JSON
    #[arg(long)]
    csv: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging. Logs go to stderr — stdout carries the
    // report and must stay machine-parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fedicheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let actor_url = cli.actor.trim().to_string();

    if let Some(username) = actor::actor_username(&actor_url) {
        info!(user = %username, "checking actor compatibility");
    }

    let client = ApClient::new()?;

    let actor_doc = client
        .fetch_json(&actor_url, Some(ACTIVITY_ACCEPT))
        .await
        .with_context(|| format!("Failed to fetch actor document from {actor_url}"))?;

    let missing = actor::missing_fields(&actor_doc);
    if !missing.is_empty() {
        println!(
            "{} actor missing fields: {}",
            "FAIL:".red().bold(),
            missing.join(", ")
        );
        std::process::exit(2);
    }

    let outbox_url = actor_doc
        .get("outbox")
        .and_then(|v| v.as_str())
        .context("Actor outbox is not a string URL")?
        .to_string();

    let outbox_doc = client
        .fetch_json(&outbox_url, None)
        .await
        .with_context(|| format!("Failed to fetch outbox from {outbox_url}"))?;

    // A collection summary points at its first page; an inline outbox is
    // itself the page to scan.
    let first_url = outbox::first_page_url(&outbox_doc).map(str::to_owned);
    let page = match first_url {
        Some(page_url) => {
            debug!(url = %page_url, "outbox is paginated, fetching first page");
            client
                .fetch_json(&page_url, None)
                .await
                .with_context(|| format!("Failed to fetch outbox page from {page_url}"))?
        }
        None => outbox_doc,
    };

    let items = outbox::ordered_items(&page);
    if items.is_empty() {
        println!("{}", "WARN: outbox empty (cannot check notes)".yellow());
    }

    let note = outbox::find_note(items, cli.outbox_limit);
    if note.is_none() && !items.is_empty() {
        debug!(
            scanned = items.len().min(cli.outbox_limit),
            "no note-like object in scanned items"
        );
    }

    let matrix = CompatMatrix::evaluate(&actor_doc, note);

    if cli.csv {
        println!("{}", output::render_csv(&matrix));
    } else {
        println!("{}", output::render_json(&actor_url, &matrix)?);
        if matrix.has_failures() {
            output::warn_incomplete();
        }
    }

    Ok(())
}
