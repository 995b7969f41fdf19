//! Command-line interface definitions for the lookup server.
//!
//! All arguments can be provided via command-line flags or environment variables.

use crate::lookup::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Command-line arguments for the people lookup server.
///
/// # Examples
///
/// ```sh
/// # Listen on the default port (3000)
/// people_lookup
///
/// # Custom port and cross-reference table
/// PORT=8080 people_lookup --cross-references ./cross_references.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the people-search site
    #[arg(long, env = "LOOKUP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Optional YAML file replacing the built-in cross-reference table
    #[arg(long, env = "CROSS_REFERENCES")]
    pub cross_references: Option<PathBuf>,
}
