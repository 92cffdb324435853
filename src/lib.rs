//! # fanmap
//!
//! Structured-concurrency building blocks: a generic parallel map over
//! fallible asynchronous transforms, and a bridge that turns one-shot
//! callback APIs into awaitable calls.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! fanmap = "0.1"
//! ```
//!
//! Fan a transform out over a sequence and collect the results:
//!
//! ```
//! use fanmap::{parallel_map, Error, ParallelConfig};
//!
//! # tokio_test::block_on(async {
//! let squares = parallel_map(
//!     vec![0i64, 1, 2, 3],
//!     |x| async move { Ok::<_, Error>(x * x) },
//!     ParallelConfig::default(),
//! )
//! .await
//! .unwrap();
//!
//! // Default collection is completion-ordered; the values are a permutation
//! // of the transformed inputs.
//! let mut sorted = squares.clone();
//! sorted.sort_unstable();
//! assert_eq!(sorted, vec![0, 1, 4, 9]);
//! # });
//! ```
//!
//! Results arrive in completion order by default. The first error from any
//! task aborts the whole operation and cancels the tasks still in flight:
//!
//! ```
//! use fanmap::{parallel_map, Error, ParallelConfig};
//! use fanmap::workloads::factorize;
//!
//! # tokio_test::block_on(async {
//! let result = parallel_map(
//!     vec![10i64, -7],
//!     |n| async move { factorize(n) },
//!     ParallelConfig::default().ordered(),
//! )
//! .await;
//!
//! assert_eq!(result, Err(Error::NegativeInput { value: -7 }));
//! # });
//! ```
//!
//! Bridge a callback API into an awaitable value:
//!
//! ```
//! use fanmap::with_continuation;
//!
//! # tokio_test::block_on(async {
//! let answer = with_continuation(|continuation| {
//!     std::thread::spawn(move || continuation.resume(42));
//! })
//! .await
//! .unwrap();
//!
//! assert_eq!(answer, 42);
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`parallel`] - the parallel map combinator and its configuration
//! - [`bridge`] - callback-to-future bridging
//! - [`workloads`] - demo payloads (HTTP fetch, delayed values, factorization)
//! - [`error`] - error taxonomy

pub mod bridge;
pub mod error;
pub mod parallel;
pub mod workloads;

pub use bridge::{result_from_parts, with_continuation, Continuation};
pub use error::{Error, Result};
pub use parallel::{parallel_map, ParallelConfig};
