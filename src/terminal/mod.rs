//! Shared terminal utilities: box drawing and entropy summaries.

mod output;

pub use output::*;
