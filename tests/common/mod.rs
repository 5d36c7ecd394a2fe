//! Shared test utilities for skyscan integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_opensky;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_opensky::{dead_url, FakeOpenSky, Reply};
pub use fixtures::*;
