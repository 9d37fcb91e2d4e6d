// SPDX-License-Identifier: Apache-2.0

//! Binary entry point for the issuelens web server.

use anyhow::Context;
use clap::Parser;
use issuelens_core::{Credentials, load_config};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "issuelens=info,reqwest=warn";

/// Serve the issuelens web form and JSON API.
#[derive(Parser)]
#[command(name = "issuelens-web")]
#[command(version, about, long_about = None)]
struct Args {
    /// Interface to bind (overrides `web.host`)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides `web.port`)
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

fn init_logging() {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = load_config().context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.web.host = host;
    }
    if let Some(port) = args.port {
        config.web.port = port;
    }

    issuelens_web::run_http(config, Credentials::from_env()).await
}
