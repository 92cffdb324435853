//! Parallel map over asynchronous transforms
//!
//! Uses a tokio task group with a configurable concurrency cap.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of tasks running at once; `None` means one live task
    /// per input element (default: `Some(num_cpus)`)
    pub max_parallelism: Option<usize>,
    /// Return results in input order instead of completion order
    pub preserve_order: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: Some(num_cpus::get()),
            preserve_order: false,
        }
    }
}

impl ParallelConfig {
    /// No concurrency cap: one live task per input element.
    pub fn unbounded() -> Self {
        Self {
            max_parallelism: None,
            ..Self::default()
        }
    }

    /// Cap the number of concurrently running tasks (minimum 1).
    pub fn with_max_parallelism(mut self, limit: usize) -> Self {
        self.max_parallelism = Some(limit.max(1));
        self
    }

    /// Return results in input order.
    pub fn ordered(mut self) -> Self {
        self.preserve_order = true;
        self
    }
}

/// Parallel map operation over a sequence of inputs
///
/// Spawns one task per input element, in input order, and drains completions
/// on the calling task. By default results are collected in completion order,
/// which is runtime-dependent; set [`ParallelConfig::preserve_order`] to get
/// input-order output instead.
///
/// # Arguments
/// * `inputs` - Finite sequence of elements to process
/// * `transform` - Fallible async function applied to each element
/// * `config` - Parallel execution configuration
///
/// # Returns
/// * `Ok(Vec<R>)` - One result per input element, completion-ordered unless
///   `preserve_order` is set
/// * `Err(E)` - First error surfaced by any task; remaining in-flight tasks
///   are aborted and no partial results are returned
///
/// # Panics
/// If the transform panics inside a task, the panic is resumed on the caller.
///
/// # Example
/// ```
/// use fanmap::{parallel_map, Error, ParallelConfig};
///
/// # tokio_test::block_on(async {
/// let squares = parallel_map(
///     vec![1, 2, 3],
///     |x| async move { Ok::<_, Error>(x * x) },
///     ParallelConfig::default(),
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(squares.len(), 3);
/// # });
/// ```
pub async fn parallel_map<In, R, E, T, Fut>(
    inputs: impl IntoIterator<Item = In>,
    transform: T,
    config: ParallelConfig,
) -> Result<Vec<R>, E>
where
    In: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    T: Fn(In) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    let inputs: Vec<In> = inputs.into_iter().collect();
    let total = inputs.len();

    // Empty sequence fast path: the transform is never invoked
    if total == 0 {
        return Ok(Vec::new());
    }

    let transform = Arc::new(transform);
    let limiter = config
        .max_parallelism
        .map(|cap| Arc::new(Semaphore::new(cap.max(1))));

    tracing::debug!(total, capped = limiter.is_some(), "spawning parallel map tasks");

    let mut tasks = JoinSet::new();
    for (index, item) in inputs.into_iter().enumerate() {
        let transform = Arc::clone(&transform);
        let limiter = limiter.clone();
        tasks.spawn(async move {
            // The semaphore lives for the whole call and is never closed
            let _permit = match limiter {
                Some(semaphore) => Some(
                    semaphore
                        .acquire_owned()
                        .await
                        .expect("parallelism semaphore closed"),
                ),
                None => None,
            };
            transform(item).await.map(|value| (index, value))
        });
    }

    let mut collected: Vec<(usize, R)> = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok((index, value))) => collected.push((index, value)),
            Ok(Err(error)) => {
                // Dropping the JoinSet aborts every task still in flight
                tracing::debug!("parallel map task failed, aborting remaining tasks");
                return Err(error);
            }
            Err(join_error) if join_error.is_cancelled() => continue,
            Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
        }
    }

    if config.preserve_order {
        collected.sort_unstable_by_key(|(index, _)| *index);
    }

    Ok(collected.into_iter().map(|(_, value)| value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_parallel_map_basic() {
        let mut results = parallel_map(
            vec![1i64, 2, 3],
            |n| async move { Ok::<_, Error>(n * 2) },
            ParallelConfig::default(),
        )
        .await
        .unwrap();

        results.sort_unstable();
        assert_eq!(results, vec![2, 4, 6]);
    }

    #[tokio::test]
    async fn test_parallel_map_empty() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invocations);

        let results = parallel_map(
            Vec::<i64>::new(),
            move |n| {
                counter.fetch_add(1, Ordering::SeqCst);
                async move { Ok::<_, Error>(n) }
            },
            ParallelConfig::default(),
        )
        .await
        .unwrap();

        assert!(results.is_empty());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_parallel_map_single_item() {
        let results = parallel_map(
            vec![7i64],
            |n| async move { Ok::<_, Error>(n * n) },
            ParallelConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(results, vec![49]);
    }

    #[tokio::test]
    async fn test_parallel_map_first_error_propagates() {
        let result = parallel_map(
            vec![1i64, -4, 3],
            |n| async move {
                if n < 0 {
                    Err(Error::NegativeInput { value: n })
                } else {
                    Ok(n * 2)
                }
            },
            ParallelConfig::default(),
        )
        .await;

        assert_eq!(result, Err(Error::NegativeInput { value: -4 }));
    }

    #[tokio::test]
    async fn test_parallel_map_preserve_order() {
        // Longer sleeps for earlier elements so completion order inverts
        // spawn order; preserve_order must still return input order.
        let results = parallel_map(
            vec![3u64, 2, 1, 0],
            |n| async move {
                tokio::time::sleep(Duration::from_millis(n * 40)).await;
                Ok::<_, Error>(n)
            },
            ParallelConfig::unbounded().ordered(),
        )
        .await
        .unwrap();

        assert_eq!(results, vec![3, 2, 1, 0]);
    }

    #[tokio::test]
    async fn test_parallel_map_completion_order_observable() {
        let results = parallel_map(
            vec![3u64, 2, 1, 0],
            |n| async move {
                tokio::time::sleep(Duration::from_millis(n * 40)).await;
                Ok::<_, Error>(n)
            },
            ParallelConfig::unbounded(),
        )
        .await
        .unwrap();

        assert_eq!(results, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    #[should_panic(expected = "transform blew up")]
    async fn test_parallel_map_resumes_transform_panic() {
        let _ = parallel_map(
            vec![1i64],
            |_| async move {
                if true {
                    panic!("transform blew up");
                }
                Ok::<i64, Error>(0)
            },
            ParallelConfig::default(),
        )
        .await;
    }

    #[tokio::test]
    async fn test_parallel_map_respects_cap() {
        let live = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let live_probe = Arc::clone(&live);
        let peak_probe = Arc::clone(&peak);

        let results = parallel_map(
            0..16i64,
            move |n| {
                let live = Arc::clone(&live_probe);
                let peak = Arc::clone(&peak_probe);
                async move {
                    let now = live.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    live.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, Error>(n)
                }
            },
            ParallelConfig::default().with_max_parallelism(3),
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 16);
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }
}
