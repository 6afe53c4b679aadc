//! holidaysync_client - fetches a yearly holiday calendar and writes the
//! per-day classification to disk.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod pool;
pub mod sync;
pub mod writer;

pub use client::HolidayClient;
pub use error::{ClientError, Result};
pub use sync::{sync_year, SyncOptions, SyncReport};
