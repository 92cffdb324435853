//! Compute workloads
//!
//! A sleep-then-return value delivered through the continuation bridge, and
//! trial-division factorization fanned out over the combinator.

use std::time::Duration;

use crate::bridge::with_continuation;
use crate::error::{Error, Result};
use crate::parallel::{parallel_map, ParallelConfig};

/// Produce `value` after `delay`, resumed from a background-thread callback.
///
/// The sleep happens on a plain OS thread and completion is delivered through
/// a [`crate::Continuation`], standing in for any legacy callback API.
pub async fn delayed_value(value: i64, delay: Duration) -> Result<i64> {
    with_continuation(move |continuation| {
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            continuation.resume(value);
        });
    })
    .await
}

/// Compute the values `0..count` concurrently, each behind `delay`.
pub async fn delayed_values(
    count: u32,
    delay: Duration,
    config: ParallelConfig,
) -> Result<Vec<i64>> {
    parallel_map(0..i64::from(count), move |n| delayed_value(n, delay), config).await
}

/// Prime factorization by trial division, in non-decreasing factor order.
///
/// `0` and `1` factorize to the empty product; negative input is an error.
pub fn factorize(n: i64) -> Result<Vec<i64>> {
    if n < 0 {
        return Err(Error::NegativeInput { value: n });
    }

    let mut remaining = n;
    let mut factors = Vec::new();
    let mut divisor = 2;
    while divisor <= remaining / divisor {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 1;
    }
    if remaining > 1 {
        factors.push(remaining);
    }
    Ok(factors)
}

/// Factorize every input concurrently.
pub async fn factorizations(inputs: Vec<i64>, config: ParallelConfig) -> Result<Vec<Vec<i64>>> {
    parallel_map(inputs, |n| async move { factorize(n) }, config).await
}
