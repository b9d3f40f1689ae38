//! Fixtures and assertions shared by the integration tests.
//!
//! Every test binary compiles this module separately and uses only part of it.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
