//! `stockcast-ingest` — CSV ingestion for the sales and inventory tables.
//!
//! Row-level validation lives here, not in the engine: the store and the
//! engine assume records are already well-formed. Timestamps in both tables
//! are UNIX epoch seconds; empty cells in the optional inventory columns
//! mean "absent".

pub mod loader;

pub use loader::{
    load_inventory, load_sales, load_store, IngestError, IngestResult, INVENTORY_FILE, SALES_FILE,
};
