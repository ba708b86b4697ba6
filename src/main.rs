//! CLI entry point for the stencil-fetch tool.

use anyhow::{Context, Result};
use clap::Parser;
use stencil_net::{HeaderSet, NetworkClient, PackageInfo, RequestDescriptor};
use tracing::{debug, info};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args.package, verbose = args.verbose, "CLI arguments parsed");

    let package = PackageInfo::load(&args.package)
        .await
        .with_context(|| format!("loading {}", args.package.display()))?;
    let client = NetworkClient::with_defaults(package).context("building HTTP client")?;

    match args.command {
        Command::Get {
            url,
            token,
            headers,
        } => {
            let mut descriptor = RequestDescriptor::new(url.as_str());
            if !headers.is_empty() {
                descriptor = descriptor.headers(headers.into_iter().collect::<HeaderSet>());
            }
            if let Some(token) = token {
                descriptor = descriptor.access_token(token);
            }

            let response = client
                .send_api_request(descriptor)
                .await
                .with_context(|| format!("GET {url}"))?;
            info!(status = %response.status(), "response received");
            let body = response.text().await.context("reading response body")?;
            println!("{body}");
        }
        Command::Fetch { url, output } => {
            client
                .fetch_file(url.as_str(), &output)
                .await
                .with_context(|| format!("downloading {url}"))?;
            info!(path = %output.display(), "saved");
        }
    }

    Ok(())
}
