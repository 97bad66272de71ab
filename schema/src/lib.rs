// Battle Factory Schema - Shared type definitions
// This crate contains the stat, nature and catalog record types shared by
// the searcher and the stat calculator.

// Re-export the main types
pub use catalog::*;
pub use natures::*;
pub use stats::*;

pub mod catalog;
pub mod natures;
pub mod stats;
