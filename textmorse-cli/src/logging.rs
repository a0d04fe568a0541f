//! Tracing setup for the CLI
//!
//! The subscriber is only installed when `TEXTMORSE_LOG` (or `RUST_LOG`) is set, using
//! the usual `EnvFilter` syntax:
//!
//! ```bash
//! TEXTMORSE_LOG=debug textmorse decode message.txt
//! TEXTMORSE_LOG="textmorse::morse=trace" textmorse encode -t "hello"
//! ```
//!
//! Output goes to stderr so it never mixes with tokens or Morse on stdout.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `TEXTMORSE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TEXTMORSE_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

pub fn init_tracing() {
    let has_own_log = std::env::var("TEXTMORSE_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
