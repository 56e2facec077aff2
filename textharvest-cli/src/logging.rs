//! Diagnostic logging setup
//!
//! stdout carries the JSON data stream, so every log line (including the
//! per-document `OK:` / `ERR:` progress lines) goes to stderr.

use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "textharvest=info,textharvest_core=info";

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "textharvest=debug,textharvest_core=debug";

pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}
