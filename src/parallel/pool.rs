//! Rayon thread pool configuration for batch evaluation.

use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};

/// Configures how many worker threads are used for parallel batch execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl WorkerPool {
    /// Use all available CPU cores (Rayon default).
    pub fn default_workers() -> Self {
        Self::default()
    }

    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a thread pool with this worker count. If [workers](WorkerPool::workers) is 0,
    /// uses the global Rayon pool. Otherwise builds a temporary pool with that many threads.
    pub fn install<F, R>(&self, f: F) -> Result<R, ThreadPoolBuildError>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            Ok(f())
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .thread_name(|index| format!("mhrb-batch-{index}"))
                .build()?;
            Ok(pool.install(f))
        }
    }
}
