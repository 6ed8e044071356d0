//! Execution configuration for parallel evaluation.
//!
//! Kernels under test evaluate structured values on a rayon thread pool.
//! The upper bound on its worker threads is process-wide state owned by a
//! single [`Runtime`], initialized on first use from `MATGEN_NUM_THREADS`
//! (falling back to the available hardware parallelism).
//!
//! [`set_num_threads`] is the only way to change the bound. A new bound
//! applies to evaluations started afterwards; work already running on the
//! previous pool is not affected. Changing the bound while a parallel
//! evaluation is in flight is the caller's responsibility to avoid.
//! Concurrent setters race with last-write-wins semantics.

use matgen_core::MatrixView;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Environment variable holding the initial thread bound.
pub const NUM_THREADS_ENV: &str = "MATGEN_NUM_THREADS";

/// Error type for execution configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmpError {
    /// Thread bound of zero
    #[error("Invalid number of threads")]
    InvalidArgument,

    /// The rayon pool could not be started
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Process-wide evaluation runtime.
struct Runtime {
    threads: AtomicUsize,
    /// Pool for the most recently used bound
    pool: Mutex<Option<(usize, Arc<ThreadPool>)>>,
}

impl Runtime {
    fn from_env() -> Self {
        let threads = match std::env::var(NUM_THREADS_ENV) {
            Ok(raw) => match raw.trim().parse::<NonZeroUsize>() {
                Ok(n) => n.get(),
                Err(_) => {
                    tracing::warn!(value = %raw, "Ignoring invalid {NUM_THREADS_ENV}");
                    default_threads()
                }
            },
            Err(_) => default_threads(),
        };
        tracing::debug!(threads, "Initialized evaluation runtime");
        Self {
            threads: AtomicUsize::new(threads),
            pool: Mutex::new(None),
        }
    }

    fn pool(&self) -> Result<Arc<ThreadPool>, SmpError> {
        let threads = self.threads.load(Ordering::SeqCst);
        let mut cached = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((size, pool)) = cached.as_ref() {
            if *size == threads {
                return Ok(Arc::clone(pool));
            }
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("matgen-smp-{index}"))
            .build()
            .map_err(|e| SmpError::ThreadPool(e.to_string()))?;
        let pool = Arc::new(pool);
        *cached = Some((threads, Arc::clone(&pool)));
        tracing::debug!(threads, "Built evaluation thread pool");
        Ok(pool)
    }
}

fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(Runtime::from_env)
}

/// Upper bound on worker threads used by parallel evaluation. Always `>= 1`.
pub fn num_threads() -> usize {
    runtime().threads.load(Ordering::SeqCst)
}

/// Set the upper bound on worker threads used by parallel evaluation.
///
/// Fails with [`SmpError::InvalidArgument`] for `0`, leaving the current
/// bound unchanged.
pub fn set_num_threads(number: usize) -> Result<(), SmpError> {
    if number == 0 {
        return Err(SmpError::InvalidArgument);
    }
    let previous = runtime().threads.swap(number, Ordering::SeqCst);
    tracing::debug!(previous, threads = number, "Thread bound updated");
    Ok(())
}

/// Run `op` on a pool sized to the current thread bound.
pub fn install<OP, R>(op: OP) -> Result<R, SmpError>
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    Ok(runtime().pool()?.install(op))
}

/// Evaluate `f` for every row of `matrix` in parallel.
///
/// Results are returned in row order.
pub fn par_map_rows<M, U, F>(matrix: &M, f: F) -> Result<Vec<U>, SmpError>
where
    M: MatrixView + Sync,
    U: Send,
    F: Fn(usize, &M) -> U + Sync + Send,
{
    install(|| {
        (0..matrix.rows())
            .into_par_iter()
            .map(|i| f(i, matrix))
            .collect()
    })
}
