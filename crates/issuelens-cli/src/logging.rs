// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the issuelens CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//! Logs go to stderr so structured output on stdout stays parseable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! issuelens analyze rust-lang/rust 12345
//!
//! # Debug output for troubleshooting
//! RUST_LOG=issuelens=debug issuelens analyze rust-lang/rust 12345
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
///
/// The crates log under `issuelens_core` and `issuelens_cli`, both matched
/// by the `issuelens` prefix.
const DEFAULT_FILTER: &str = "issuelens=warn,reqwest=error";

/// Initialize the logging subsystem.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
