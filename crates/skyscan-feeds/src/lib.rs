//! skyscan-feeds — upstream state-vector sources for skyscan.
//!
//! The only source is the OpenSky `states/all` endpoint. A fetch never fails
//! outright: every transport, status, or payload problem ends up in the
//! [`FetchResult`] next to an empty row list.

pub mod error;
pub mod opensky;

pub use error::FetchError;
pub use opensky::{FetchResult, OpenSkyClient};
