//! Application layer - orchestrates the specialization use case

pub mod commands;
pub mod specialize;
pub mod traits;

pub use commands::*;
pub use specialize::*;
pub use traits::*;
