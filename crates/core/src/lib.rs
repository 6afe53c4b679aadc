//! holidaysync_core - pure holiday calendar logic for holidaysync.
//!
//! Everything in this crate is free of I/O: it turns a year and the records
//! fetched for it into a per-day classification. Fetching and writing live
//! in `holidaysync_client`.

pub mod calendar;
