//! The batch personalization pipeline.
//!
//! Fans one render task out per guest name under a fixed concurrency
//! ceiling, tracks each batch as a queryable job, and rebuilds the poster
//! catalog from the output directory on demand.

pub mod batch;
pub mod catalog;
pub mod jobs;
pub mod process;
pub mod summary;

pub use batch::{run_batch, BatchSummary, DEFAULT_RENDER_WORKERS};
pub use catalog::{scan, PosterRecord, ScanError};
pub use jobs::JobStore;
pub use process::{process_batch, BatchContext};
