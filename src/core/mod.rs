//! Core types shared by every layer of the specialize generator.

pub mod error;

pub use error::{Error, Result};
