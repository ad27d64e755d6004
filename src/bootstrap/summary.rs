use std::cell::Cell;

use log::trace;
use serde_derive::{Deserialize, Serialize};

use crate::bootstrap::replicates::ReplicateSet;
use crate::stat::OnlineStat;

/// Mean, variance and standard deviation of a replicate distribution
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    /// Sample variance (`n - 1` denominator); `0` for a single value
    pub variance: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Summarizes `values`
    ///
    /// - Time: `O(length)`
    pub fn of(values: &[f64]) -> Summary {
        Summary::from_values(values.iter().cloned())
    }

    fn from_values<I>(values: I) -> Summary
    where
        I: IntoIterator<Item = f64>,
    {
        let (mut n, mut mean, mut m2) = (0u64, 0., 0.);

        for x in values {
            n += 1;
            let delta = x - mean;
            mean += delta / cast::f64(n);
            m2 += delta * (x - mean);
        }

        let variance = if n < 2 { 0. } else { m2 / cast::f64(n - 1) };

        Summary {
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

/// Lazily recomputed summary of a replicate set
///
/// `None` means dirty: the next read recomputes.
#[derive(Clone, Debug, Default)]
pub(crate) struct CachedSummary {
    summary: Cell<Option<Summary>>,
    refreshes: Cell<u64>,
}

impl CachedSummary {
    pub fn invalidate(&self) {
        self.summary.set(None);
    }

    #[cfg(test)]
    pub fn is_dirty(&self) -> bool {
        self.summary.get().is_none()
    }

    /// Returns the cached summary, recomputing it first if dirty
    pub fn get<S>(&self, replicates: &ReplicateSet<S>) -> Summary
    where
        S: OnlineStat,
    {
        match self.summary.get() {
            Some(summary) => summary,
            None => self.refresh(replicates),
        }
    }

    /// Recomputes the summary over the current replicate values and clears the dirty flag
    pub fn refresh<S>(&self, replicates: &ReplicateSet<S>) -> Summary
    where
        S: OnlineStat,
    {
        let summary = Summary::from_values(replicates.values());
        self.summary.set(Some(summary));
        self.refreshes.set(self.refreshes.get() + 1);

        trace!(
            "refreshed summary over {} replicates: {:?}",
            replicates.len(),
            summary
        );

        summary
    }

    #[cfg(test)]
    pub fn refreshes(&self) -> u64 {
        self.refreshes.get()
    }
}
