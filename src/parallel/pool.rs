//! Thread pool selection for parallel trial runs.

use rayon::ThreadPoolBuilder;

/// Where parallel trial batches execute: Rayon's shared global pool, or a
/// temporary pool pinned to an exact thread count (the CLI's `--workers`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkerPool {
    /// The global Rayon pool, one thread per core.
    #[default]
    Global,
    /// A dedicated pool with exactly this many threads.
    Fixed(usize),
}

impl WorkerPool {
    /// Flag mapping: 0 keeps the global pool, anything else pins the count.
    pub fn with_workers(n: usize) -> Self {
        match n {
            0 => Self::Global,
            n => Self::Fixed(n),
        }
    }

    /// Run `f` under this pool. A fixed pool is built for the call and torn
    /// down afterwards.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self {
            Self::Global => f(),
            Self::Fixed(threads) => ThreadPoolBuilder::new()
                .num_threads(*threads)
                .build()
                .expect("Rayon thread pool")
                .install(f),
        }
    }
}
