//! Aggregation layer.
//!
//! Collects per-document findings from the engine into batch-level counts
//! and the grouped snapshot the reporters consume. The collector is the only
//! component in the pipeline that holds cross-document state; orchestration
//! feeds it from a single consumer so appends are serialized.

pub mod collector;
pub mod summary;

pub use collector::{BatchCollector, BatchSnapshot, SeverityGroup};
pub use summary::SummaryBuilder;
