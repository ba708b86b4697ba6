//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

/// Send stencil API requests and download theme files.
///
/// Every request carries the stencil CLI identifying headers built from the
/// package descriptor.
#[derive(Parser, Debug)]
#[command(name = "stencil-fetch")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the package.json providing version headers
    #[arg(short, long, default_value = "package.json", global = true)]
    pub package: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a GET request and print the response body
    Get {
        /// Request URL
        url: Url,

        /// API access token sent as x-auth-token
        #[arg(short, long, env = "STENCIL_ACCESS_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Extra header as "name: value" (repeatable)
        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Download a URL straight to a file
    Fetch {
        /// Source URL
        url: Url,

        /// Destination file (created or truncated)
        output: PathBuf,
    },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"name: value\", got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in {raw:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
