//! # Flaky Balance
//!
//! A minimal client/server pair for exercising HTTP status-code handling.
//! The server answers `/getbalance` with a weighted-random outcome (50% 200,
//! 20% 403, 20% 408, 10% 500) and appends every outcome to an append-only
//! text log; `/getlogs` serializes that log into a JSON array on demand. The
//! client probes the server, polls the balance endpoint, classifies each
//! response, then fetches and deduplicates the log.
//!
//! ## Entry points
//!
//! Server side: build a router with [`create_router`] from a [`ServerConfig`]
//! and a [`Simulator`]. Client side: [`BalancePoller`] and [`LogsFetcher`].
//!
//! ## Example
//!
//! ```rust
//! use flaky_balance::{Simulator, SimulatorConfig};
//!
//! let mut sim = Simulator::new(SimulatorConfig { seed: Some(7) });
//! let outcome = sim.draw();
//! assert!(matches!(outcome.status_code(), 200 | 403 | 408 | 500));
//! ```

pub mod api;
pub mod client;
pub mod codec;
pub mod log_store;
pub mod simulator;
pub mod types;

pub use api::{create_router, ServerConfig};
pub use client::{BalancePoller, LogsFetcher};
pub use codec::{parse_log_line, serialize_log_lines, unique_entries, LogEntry};
pub use log_store::LogStore;
pub use simulator::{Simulator, SimulatorConfig};
pub use types::{LogRecord, Outcome};
