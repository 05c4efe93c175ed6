//! Common utilities module
//!
//! Error type shared by the reading, writing and conversion stages.

pub mod error;

pub use error::{ConversionError, Result};
