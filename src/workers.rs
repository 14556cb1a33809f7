//! Bounded worker pool construction for concurrent filesystem operations

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// Resolve the number of worker threads to use.
///
/// A requested count is clamped to the available parallelism; without a
/// request the pool is sized to the CPU count, capped at 8 so large trees
/// do not exhaust file descriptors.
pub(crate) fn worker_limit(requested: Option<usize>) -> usize {
    let n_cpu = std::thread::available_parallelism().map_or(1, std::num::NonZero::get);

    match requested {
        Some(n) => n.clamp(1, n_cpu),
        None => n_cpu.clamp(1, 8),
    }
}

/// Build a bounded pool for per-module fan-out.
///
/// # Errors
///
/// Returns an error if the pool cannot be constructed.
pub(crate) fn build_pool(requested: Option<usize>) -> Result<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(worker_limit(requested))
        .build()?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_limit_clamps_requested() {
        assert_eq!(worker_limit(Some(0)), 1);
        assert_eq!(worker_limit(Some(1)), 1);

        let n_cpu = std::thread::available_parallelism().map_or(1, std::num::NonZero::get);
        assert_eq!(worker_limit(Some(n_cpu + 100)), n_cpu);
    }

    #[test]
    fn test_worker_limit_default_is_bounded() {
        let limit = worker_limit(None);
        assert!(limit >= 1);
        assert!(limit <= 8);
    }

    #[test]
    fn test_build_pool() {
        let pool = build_pool(Some(2)).unwrap();
        assert_eq!(pool.current_num_threads(), 2);
    }
}
