//! Common utilities module
//!
//! Shared error type used by every stage of cube loading and correction.

pub mod error;

pub use error::{CubeError, Result};
