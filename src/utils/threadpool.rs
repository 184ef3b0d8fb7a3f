/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::num::NonZeroUsize;

/// Number of worker threads used when the available parallelism cannot be
/// determined.
pub const FALLBACK_NUM_THREADS: usize = 2;

/// The size of the worker pool of a parallel algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// One thread per hardware thread, or [`FALLBACK_NUM_THREADS`] if the
    /// available parallelism is unknown.
    #[default]
    Default,
    /// A fixed number of threads.
    NumThreads(usize),
}

impl Threads {
    /// Returns the number of threads of the pool this configuration builds.
    pub fn num_threads(self) -> usize {
        match self {
            Self::Default => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(FALLBACK_NUM_THREADS),
            Self::NumThreads(num_threads) => num_threads.max(1),
        }
    }

    /// Builds a thread pool with [`num_threads`](Threads::num_threads)
    /// workers.
    pub fn build(self) -> Result<ThreadPool, ThreadPoolBuildError> {
        ThreadPoolBuilder::new()
            .num_threads(self.num_threads())
            .thread_name(|index| format!("sp-worker-{}", index))
            .build()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_num_threads() -> anyhow::Result<()> {
        assert!(Threads::Default.num_threads() >= 1);
        assert_eq!(Threads::NumThreads(0).num_threads(), 1);
        assert_eq!(Threads::NumThreads(3).build()?.current_num_threads(), 3);
        Ok(())
    }
}
