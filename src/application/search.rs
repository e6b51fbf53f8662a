//! Exhaustive near-miss search over all `(x, y)` pairs.

use std::time::Instant;

use itertools::iproduct;
use tracing::{debug, info, instrument, trace};

use crate::application::ApplicationResult;
use crate::domain::{evaluate, Candidate, DomainError, RootMethod, SearchConfig, MIN_BASE};

/// Receives progress while a scan is running.
pub trait SearchObserver {
    /// Called for every strict improvement, in scan order.
    fn on_new_best(&mut self, candidate: &Candidate) -> ApplicationResult<()>;

    /// Called once all `y` for a given `x` have been evaluated.
    fn on_row_complete(&mut self, _x: u64) -> ApplicationResult<()> {
        Ok(())
    }
}

/// Observer that ignores all progress.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_new_best(&mut self, _candidate: &Candidate) -> ApplicationResult<()> {
        Ok(())
    }
}

/// Result of a completed scan.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub config: SearchConfig,
    /// Candidate with the smallest relative miss; first one wins ties
    pub best: Candidate,
    pub pairs_evaluated: u128,
    /// Number of new-best events, including the first pair
    pub improvements: usize,
}

/// Full `k²` scan in `x`-major order, replacing the best only on strict improvement.
#[derive(Debug, Clone, Copy)]
pub struct NearMissSearch {
    config: SearchConfig,
    method: RootMethod,
}

impl NearMissSearch {
    pub fn new(config: SearchConfig, method: RootMethod) -> Self {
        Self { config, method }
    }

    #[instrument(skip(self, observer), fields(n = self.config.exponent(), k = self.config.bound(), method = %self.method))]
    pub fn run(&self, observer: &mut dyn SearchObserver) -> ApplicationResult<SearchOutcome> {
        let n = self.config.exponent();
        let k = self.config.bound();
        let started = Instant::now();
        info!("scanning {} pairs", self.config.pair_count());

        let mut best: Option<Candidate> = None;
        let mut pairs_evaluated: u128 = 0;
        let mut improvements = 0usize;

        for (x, y) in iproduct!(MIN_BASE..=k, MIN_BASE..=k) {
            let candidate = evaluate(x, y, n, self.method);
            pairs_evaluated += 1;

            let improved = best
                .as_ref()
                .map_or(true, |current| candidate.is_closer_than(current));
            if improved {
                debug!(
                    x,
                    y,
                    z = %candidate.z,
                    relative_miss = candidate.relative_miss,
                    "new best"
                );
                observer.on_new_best(&candidate)?;
                improvements += 1;
                best = Some(candidate);
            }

            if y == k {
                trace!(x, "row complete");
                observer.on_row_complete(x)?;
            }
        }

        let best = best.ok_or(DomainError::EmptySearch)?;
        info!(
            "scan finished: {} pairs, {} improvements in {:?}",
            pairs_evaluated,
            improvements,
            started.elapsed()
        );

        Ok(SearchOutcome {
            config: self.config,
            best,
            pairs_evaluated,
            improvements,
        })
    }
}
