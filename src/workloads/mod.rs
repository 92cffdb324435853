//! Demo workloads
//!
//! Toy asynchronous payloads used to exercise the parallel map combinator and
//! the continuation bridge: an HTTP text fetch, a callback-delayed value, and
//! integer factorization. None of these are part of the combinator contract.

mod compute;
mod http;

pub use compute::{delayed_value, delayed_values, factorizations, factorize};
pub use http::{fetch_many, fetch_text, LOREM_MARKDOWN_URL};
