use clap::Parser;
use people_lookup::cli::Cli;
use people_lookup::{CrossReferences, LookupService, server};
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let cross_refs = match &args.cross_references {
        Some(path) => CrossReferences::from_path(path).await?,
        None => CrossReferences::builtin()?,
    };
    info!(
        base_url = %args.base_url,
        cross_references = cross_refs.len(),
        "people_lookup starting up"
    );

    let lookup = LookupService::new(args.base_url, cross_refs)?;
    server::serve(args.port, lookup).await
}
