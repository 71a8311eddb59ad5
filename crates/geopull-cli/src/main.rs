//! Command-line interface for `geopull`, a paginated feature-service extractor.
//!
//! This binary provides a user-friendly CLI over the [`geopull_client`] and
//! [`geopull_core`] libraries, pulling complete layers from ArcGIS-style
//! feature services such as the ONS Open Geography Portal.
//!
//! # Architecture
//!
//! The CLI is built using [`clap`] for argument parsing and [`tracing`] for
//! structured logging. It parses arguments, configures logging, and delegates
//! to command handlers; all fetching happens synchronously in this thread.
//!
//! # Available Commands
//!
//! - `fetch` - Pull every page of a layer and write it as GeoJSON
//! - `layers` - List the known feature-service layers

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;
use url::Url;

use geopull_client::{FeatureClient, FeatureQuery};
use geopull_core::catalog;
use geopull_core::writer::write_geojson;

mod display;

#[derive(Parser)]
#[command(
    name = "geopull",
    version,
    about = "Paginated vector feature ingestion from ArcGIS-style feature services",
    long_about = "geopull pulls complete layers from ArcGIS-style feature services,\n\
                  following server-side pagination until every record has arrived."
)]
/// Command-line arguments and options for the `geopull` CLI.
///
/// This struct defines the top-level CLI interface, including global flags
/// for logging verbosity and the subcommand to execute.
struct Cli {
    /// Enable verbose (INFO level) logging output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug (DEBUG level) logging output with detailed diagnostics.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `geopull` CLI.
#[derive(Subcommand)]
enum Commands {
    /// Fetches every record of a layer, following service pagination.
    ///
    /// The layer is selected either by catalog name or by a raw query
    /// endpoint URL, and the result is written as a single GeoJSON file.
    Fetch(FetchArgs),

    /// Lists the known feature-service layers.
    ///
    /// This command provides an overview of the catalog entries that can be
    /// passed to `fetch --layer`.
    Layers,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args)]
struct FetchArgs {
    /// Catalog layer to fetch (see `geopull layers`).
    #[arg(short, long, value_name = "NAME", conflicts_with = "endpoint")]
    layer: Option<String>,

    /// Raw feature-service query endpoint URL (ends in `/query`).
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    /// Attribute filter expression sent to the service.
    #[arg(long = "where", value_name = "EXPR", default_value = "1=1")]
    where_clause: String,

    /// Comma-separated list of fields to request.
    #[arg(long, value_name = "FIELDS", default_value = "*")]
    fields: String,

    /// Output spatial reference identifier.
    #[arg(long, value_name = "SRID", default_value_t = 4326)]
    srid: u32,

    /// Cap on records per page; the service may return fewer.
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,

    /// HTTP timeout in seconds; unlimited when omitted.
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Path of the GeoJSON file to write.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Skip the fetch when the output file already exists.
    #[arg(long)]
    skip_existing: bool,
}

/// Entry point for the `geopull` command-line interface.
///
/// This function parses command-line arguments, configures the logging
/// system based on verbosity flags, and dispatches to the appropriate
/// command handler.
///
/// # Errors
///
/// Returns an error if command execution fails or if the logging system
/// cannot be initialized.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity flags
    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // Bridge logs from the `log` crate to the `tracing` ecosystem.
    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true) // Show module paths for better context
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute the command
    match cli.command {
        Commands::Fetch(args) => {
            info!("Fetching into {}", args.output.display());
            handle_fetch(&args)?;
        },
        Commands::Layers => {
            handle_layers()?;
        },
    }

    Ok(())
}

fn handle_fetch(args: &FetchArgs) -> Result<()> {
    info!("Fetch command:");
    info!("Output: {}", args.output.display());
    debug!("Where: {}", args.where_clause);
    debug!("Fields: {}", args.fields);
    debug!("SRID: {}", args.srid);

    if args.skip_existing && args.output.exists() {
        info!("Output file already exists; skipping fetch.");
        println!("Skipped: {} already exists", args.output.display());
        return Ok(());
    }

    let (endpoint, dataset) = resolve_endpoint(args.layer.as_deref(), args.endpoint.as_deref())?;
    info!("Dataset: {dataset}");
    debug!("Endpoint: {endpoint}");

    let mut query = FeatureQuery::new()
        .with_where(args.where_clause.as_str())
        .with_out_fields(args.fields.as_str())
        .with_out_sr(args.srid);
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }

    let client = build_client(args.timeout)?;
    let collection = client
        .fetch_all(&endpoint, query)
        .map_err(|e| anyhow!("Failed to fetch {dataset}: {e}"))?;

    let mut output_file =
        File::create(&args.output).map_err(|e| anyhow!("Failed to create output file: {e}"))?;
    write_geojson(&mut output_file, &collection)
        .map_err(|e| anyhow!("Failed to write GeoJSON file: {e}"))?;

    display::display_fetch_summary(&dataset, &collection, &args.output);
    info!("Fetch complete.");
    Ok(())
}

/// Turn the layer/endpoint selection into a query URL and a dataset label.
fn resolve_endpoint(layer: Option<&str>, endpoint: Option<&str>) -> Result<(Url, String)> {
    match (layer, endpoint) {
        (Some(name), None) => {
            let layer = catalog::find_layer(name).ok_or_else(|| {
                anyhow!(
                    "Layer '{name}' not found. Known layers: {}.",
                    catalog::layer_names().join(", ")
                )
            })?;
            let url = Url::parse(layer.endpoint).map_err(|e| {
                anyhow!("Catalog endpoint for '{}' is invalid: {e}", layer.short_name)
            })?;
            Ok((url, layer.long_name.to_string()))
        },
        (None, Some(raw)) => {
            let url =
                Url::parse(raw).map_err(|e| anyhow!("Endpoint '{raw}' is not a valid URL: {e}"))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(anyhow!("Endpoint '{raw}' must use http or https."));
            }
            Ok((url, raw.to_string()))
        },
        // clap enforces the conflict, but direct callers hit these arms too
        (Some(_), Some(_)) => Err(anyhow!("Use either --layer or --endpoint, not both.")),
        (None, None) => Err(anyhow!("Either --layer or --endpoint is required.")),
    }
}

fn build_client(timeout: Option<u64>) -> Result<FeatureClient> {
    let Some(seconds) = timeout else {
        return Ok(FeatureClient::new());
    };
    let http = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(seconds))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))?;
    Ok(FeatureClient::with_http(http))
}

#[allow(clippy::unnecessary_wraps)] // Keeps the handler signatures uniform
fn handle_layers() -> Result<()> {
    display::display_layers(&catalog::layers());
    Ok(())
}
