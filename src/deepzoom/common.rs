//! Common utilities module
//!
//! This module contains shared utilities used across the tiling pipeline.

pub mod error;

pub use error::{TilerError, Result};
