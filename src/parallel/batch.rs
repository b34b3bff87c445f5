//! Batch distribution for parallel trial execution.
//!
//! The Monte Carlo runner hands each worker a contiguous range of trial
//! indices; this module computes those boundaries. Contiguous ranges keep the
//! final reduction in plain trial order, which is what makes the parallel
//! aggregate bit-identical to the sequential one.

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use peloton::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run a parallel Monte Carlo race batch on a configured worker pool.
/// Convenience wrapper that calls
/// [crate::montecarlo::run_monte_carlo_parallel] inside
/// [crate::parallel::pool::WorkerPool::install].
pub fn run_simulation_batches(
    field: &crate::montecarlo::Field,
    route: &crate::race::route::Route,
    trials: usize,
    seed: u64,
    pool: &crate::parallel::pool::WorkerPool,
) -> Result<crate::montecarlo::AggregateResult, crate::error::SimError> {
    pool.install(|| crate::montecarlo::run_monte_carlo_parallel(field, route, trials, seed))
}
