//! skyscan — live aircraft in a bounding box, filtered and counted by origin
//! country.
//!
//! This crate re-exports the workspace layers so integration tests and
//! benchmarks can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! feeds (fetch) ──► core (normalize, filter, count) ──► web (HTML / JSON / map)
//! ```
//!
//! Each inbound request runs one fetch followed by one pipeline pass. Nothing
//! is cached or shared between requests except the immutable configuration
//! and the HTTP connection pool.

pub use skyscan_core as core;
pub use skyscan_feeds as feeds;
pub use skyscan_web as web;

pub use skyscan_core::{
    AdmissionPolicy, BoundingBox, CountryCount, NormalizedState, Projection, RawStateVector, Rows,
};
