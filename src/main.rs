use anyhow::{bail, Context, Result};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use page_links::config::Config;
use page_links::error::parse_page_number;
use page_links::page_number::RequestedPage;
use page_links::pagination::{paginate, PaginateOptions};
use page_links::paginator::DefaultPaginator;

const USAGE: &str = "usage: page-links <total_items> [page]";

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {e:#}");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (total, requested) = match args.as_slice() {
        [total] => (parse_total(total)?, RequestedPage::Default),
        [total, page] => (
            parse_total(total)?,
            RequestedPage::Number(parse_page_number(page).context("Invalid page argument")?),
        ),
        _ => bail!(USAGE),
    };

    debug!(total, ?requested, per_page = config.per_page, "Paginating");

    let paginator = DefaultPaginator::with_sizes(0..total, config.page_sizes(None, None));
    let view = paginate(
        &paginator,
        requested,
        &config.page_list_style,
        &PaginateOptions::default(),
        &config,
    )
    .context("Failed to paginate")?
    // Report items by their 1-based position, matching start_index and end_index.
    .map(|index| index + 1);

    let json = serde_json::to_string_pretty(&view).context("Failed to serialize page")?;
    println!("{json}");
    Ok(())
}

fn parse_total(value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid total_items {value:?}\n{USAGE}"))
}

fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,page_links=info"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // Logs go to stderr so stdout stays valid JSON.
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
