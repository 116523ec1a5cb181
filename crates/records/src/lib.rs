//! `stockcast-records` — immutable projection of the ingested tables.
//!
//! This crate holds the record value types and the indexed store the engine
//! queries. Construction takes already-validated inputs; row-level validation
//! is the ingestion collaborator's job.

pub mod record;
pub mod store;

pub use record::{InventoryRecord, SalesRecord};
pub use store::RecordStore;
