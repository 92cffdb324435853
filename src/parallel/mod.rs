//! Parallel execution support
//!
//! Provides the parallel map combinator for processing sequences concurrently.

mod executor;

pub use executor::{parallel_map, ParallelConfig};
