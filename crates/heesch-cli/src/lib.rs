//! Heesch Table Generators
//!
//! Stream drivers behind the `kite-neighbours` and `hex-to-iamond` binaries.
//! Both write data to stdout only; diagnostics go through `tracing` to stderr.
//!
//! # Usage
//!
//! ```text
//! kite-neighbours [cpp|json] > kite_tables.inc
//! hex-to-iamond < polyhexes.txt > polyiamonds.txt
//! ```
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=hex_to_iamond=debug`.

mod error;
mod iamond;
mod kite;

pub use error::{Error, Result};
pub use iamond::{process_records, RecordStats};
pub use kite::{write_kite_tables, TableFormat};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr tracing subscriber, honouring `RUST_LOG` when set.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
