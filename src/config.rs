//! Algorithm configuration.
//!
//! None of the algorithms in this crate suspend or time out on their own. A caller
//! that needs to guard against pathological inputs sets an iteration cap in
//! [`AlgorithmConfig`]; every outer loop then charges one unit against an
//! [`IterationBudget`] and aborts with
//! [`GraphError::IterationLimitExceeded`] once the cap is passed.
//!
//! The configuration is plain data and derives `serde` traits so it can be
//! loaded from whatever format the embedding application uses.

use crate::error::{GraphError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Knobs shared by traversal, shortest-path, and coloring entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmConfig {
    /// Maximum number of outer-loop iterations, `None` for unbounded.
    pub iteration_limit: Option<usize>,
    /// Seed for randomized orderings, `None` to draw from OS entropy.
    pub seed: Option<u64>,
}

impl AlgorithmConfig {
    /// Unbounded, entropy-seeded configuration.
    pub const fn new() -> Self {
        Self {
            iteration_limit: None,
            seed: None,
        }
    }

    /// Sets the iteration cap.
    #[must_use]
    pub const fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Sets the seed for randomized orderings.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starts a fresh budget for one algorithm run.
    pub fn budget(&self) -> IterationBudget {
        IterationBudget::new(self.iteration_limit)
    }

    /// Builds the random generator used by shuffling orderings.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Counts loop iterations against an optional cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    limit: Option<usize>,
    spent: usize,
}

impl IterationBudget {
    /// Creates a budget with the given cap.
    pub const fn new(limit: Option<usize>) -> Self {
        Self { limit, spent: 0 }
    }

    /// A budget that never runs out.
    pub const fn unbounded() -> Self {
        Self::new(None)
    }

    /// Charges one iteration.
    ///
    /// # Errors
    /// Returns [`GraphError::IterationLimitExceeded`] when the charge would pass
    /// the configured cap.
    pub fn charge(&mut self) -> Result<()> {
        self.spent += 1;
        match self.limit {
            Some(limit) if self.spent > limit => Err(GraphError::IterationLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Iterations charged so far.
    pub const fn spent(&self) -> usize {
        self.spent
    }
}
