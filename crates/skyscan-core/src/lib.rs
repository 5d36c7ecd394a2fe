//! skyscan-core — state-vector schema, pipeline, and configuration.
//!
//! This crate owns everything between the raw upstream payload and the
//! presentation layer: the positional schema of an OpenSky state vector, the
//! typed request-scoped entities built from it, and the pure normalisation /
//! aggregation pipeline.
//!
//! # Architecture
//!
//! ```text
//! Fetcher ──► Normalizer/Aggregator ──► Snapshot ──► HTML / JSON / map
//!             (this crate)
//! ```
//!
//! Nothing here performs I/O except [`config::Config::load`].

pub mod config;
pub mod pipeline;
pub mod schema;
pub mod types;

pub use pipeline::{AdmissionPolicy, Projection, Rows, Selection};
pub use types::{BboxIssue, BoundingBox, CountryCount, NormalizedState, RawStateVector};
