//! Rayon thread-pool configuration for trial batches.
//!
//! Use [WorkerPool::install] to run a parallel aggregate batch with a fixed
//! number of threads, or rely on Rayon's default (all CPU cores).

use std::env;

use rayon::ThreadPoolBuilder;

/// Environment variable overriding the worker count; 0 or unset means the
/// Rayon default.
pub const WORKERS_ENV: &str = "PELOTON_WORKERS";

/// Configures how many worker threads run parallel trial batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use the Rayon default (all cores).
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Read the worker count from [WORKERS_ENV]; unparsable or missing
    /// values fall back to the Rayon default.
    pub fn from_env() -> Self {
        let workers = env::var(WORKERS_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        Self { workers }
    }

    /// Run a closure on a pool with this worker count. A zero worker count
    /// uses the global Rayon pool; otherwise a temporary pool is built with
    /// exactly that many threads.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
                .expect("Rayon thread pool");
            pool.install(f)
        }
    }
}
