use itertools::Itertools;
use log::debug;

use crate::bootstrap::{Bootstrap, Summary};
use crate::confidence::{check_level, ConfidenceInterval, Method, Tails};
use crate::error::{Error, Result};
use crate::stat::OnlineStat;

/// Replicate-wise difference of two bootstraps, frozen at the time it was taken
///
/// Holds its own copy of the differences, so the parents can keep ingesting (or be dropped)
/// without affecting it.
#[derive(Clone, Debug, PartialEq)]
pub struct FrozenDifference {
    value: f64,
    diffs: Box<[f64]>,
    summary: Summary,
}

impl FrozenDifference {
    /// Computes `a - b` replicate by replicate
    ///
    /// Both bootstraps must have the same number of replicates and at least one observation.
    pub fn new<S>(a: &Bootstrap<S>, b: &Bootstrap<S>) -> Result<FrozenDifference>
    where
        S: OnlineStat,
    {
        if a.nreplicates() != b.nreplicates() {
            return Err(Error::IncompatibleOperation(format!(
                "can not difference bootstraps with {} and {} replicates",
                a.nreplicates(),
                b.nreplicates()
            )));
        }

        if a.observation_count() == 0 || b.observation_count() == 0 {
            return Err(Error::InsufficientData("bootstrap difference"));
        }

        let diffs: Box<[f64]> = a
            .replicate_values()
            .zip_eq(b.replicate_values())
            .map(|(x, y)| x - y)
            .collect();
        let summary = Summary::of(&diffs);

        debug!(
            "froze difference of {} replicates, mean {}",
            diffs.len(),
            summary.mean
        );

        Ok(FrozenDifference {
            value: a.value() - b.value(),
            diffs,
            summary,
        })
    }

    /// Difference between the two base statistics
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Mean of the replicate differences
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    pub fn variance(&self) -> f64 {
        self.summary.variance
    }

    pub fn std_dev(&self) -> f64 {
        self.summary.std_dev
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Computes a confidence interval for the difference
    pub fn confidence_interval(
        &self,
        confidence_level: f64,
        method: Method,
    ) -> Result<ConfidenceInterval> {
        check_level(confidence_level)?;

        ConfidenceInterval::compute(
            self.replicate_values(),
            &self.summary,
            confidence_level,
            method,
        )
    }

    /// Like `confidence_interval`, with the method given by name
    pub fn confidence_interval_named(
        &self,
        confidence_level: f64,
        method: &str,
    ) -> Result<ConfidenceInterval> {
        let method = method.parse::<Method>()?;

        self.confidence_interval(confidence_level, method)
    }

    /// Returns the replicate differences
    pub fn replicate_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.diffs.iter().cloned()
    }

    pub fn nreplicates(&self) -> usize {
        self.diffs.len()
    }

    /// Computes the "likelihood" of seeing the value `t` or "more extreme" values in the
    /// distribution of differences
    pub fn p_value(&self, t: f64, tails: Tails) -> f64 {
        let n = self.diffs.len();
        let hits = self.diffs.iter().filter(|&&x| x < t).count();

        let tails = match tails {
            Tails::One => 1.,
            Tails::Two => 2.,
        };

        cast::f64(hits.min(n - hits)) / cast::f64(n) * tails
    }

    /// Returns the state as ordered `(name, value)` pairs
    pub fn report(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("value", self.value),
            ("mean", self.summary.mean),
            ("variance", self.summary.variance),
            ("std_dev", self.summary.std_dev),
            ("nreplicates", cast::f64(self.nreplicates())),
        ]
    }
}
