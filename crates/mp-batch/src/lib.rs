//! memopress batch driver — scans a notes directory for dated files and
//! rewrites each through the compression pipeline.

pub mod driver;
pub mod error;

pub use driver::{BatchDriver, BatchStats, FileReport};
pub use error::{BatchError, Result};

#[cfg(test)]
mod tests;
