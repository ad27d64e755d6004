//! Streaming bootstrap
//!
//! A [`Bootstrap`] wraps an online statistic and keeps `N` resampled copies of it next to the
//! real one. Every observation is fed once to the real statistic and a random number of times
//! to each replicate, as decided by the [`ResamplingPolicy`]. The spread of the replicate
//! values estimates the sampling distribution of the statistic, from which confidence
//! intervals are derived.

mod frozen;
mod policy;
mod replicates;
mod summary;

use std::ops::Sub;

use log::debug;

use crate::config::BootstrapConfig;
use crate::confidence::{ConfidenceInterval, Method};
use crate::error::{Error, Result};
use crate::rand_util::{new_rng, seeded_rng, Rng};
use crate::stat::OnlineStat;

use self::summary::CachedSummary;

pub use self::frozen::FrozenDifference;
pub use self::policy::ResamplingPolicy;
pub use self::replicates::ReplicateSet;
pub use self::summary::Summary;

/// Bootstrap wrapper around the online statistic `S`
///
/// Not meant to be shared between threads: reads refresh an internal cache.
#[derive(Clone, Debug)]
pub struct Bootstrap<S> {
    base: S,
    replicates: ReplicateSet<S>,
    policy: ResamplingPolicy,
    cache: CachedSummary,
    rng: Rng,
    confidence_level: f64,
    method: Method,
}

impl<S> Bootstrap<S>
where
    S: OnlineStat,
{
    /// Wraps `stat` with `nreplicates` replicates resampled according to `policy`
    ///
    /// `stat` is only a template: the base statistic and every replicate start from
    /// `stat.fresh()`.
    pub fn new(stat: S, nreplicates: usize, policy: ResamplingPolicy) -> Result<Bootstrap<S>> {
        let config = BootstrapConfig::default()
            .nreplicates(nreplicates)
            .policy(policy);

        Bootstrap::with_config(stat, &config)
    }

    /// Wraps `stat` as described by `config`
    pub fn with_config(stat: S, config: &BootstrapConfig) -> Result<Bootstrap<S>> {
        config.validate()?;

        let replicates = ReplicateSet::new(&stat, config.nreplicates)?;
        let rng = match config.seed {
            Some(seed) => seeded_rng(seed),
            None => new_rng(),
        };

        debug!(
            "bootstrap with {} replicates, {:?} resampling",
            config.nreplicates, config.policy
        );

        Ok(Bootstrap {
            base: stat.fresh(),
            replicates,
            policy: config.policy.clone(),
            cache: CachedSummary::default(),
            rng,
            confidence_level: config.confidence_level,
            method: config.method,
        })
    }

    /// Feeds one observation
    pub fn ingest(&mut self, value: f64) {
        self.push(value);
        self.cache.invalidate();
    }

    /// Feeds every observation of `values`, in order
    pub fn ingest_batch<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.push(value);
        }

        self.cache.invalidate();
    }

    fn push(&mut self, value: f64) {
        self.base.update(value);
        self.policy
            .resample(&mut self.rng, &mut self.replicates, value);
    }

    /// Returns the current value of the (non-resampled) statistic
    pub fn value(&self) -> f64 {
        self.base.value()
    }

    /// Returns the statistic fed with every observation exactly once
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Mean of the replicate values
    ///
    /// On short streams some replicates may not have seen any observation yet; they report
    /// the empty value of `S` (`0` for `Mean`) and pull the summary towards it.
    pub fn mean(&self) -> Result<f64> {
        Ok(self.summary("mean")?.mean)
    }

    /// Variance of the replicate values
    pub fn variance(&self) -> Result<f64> {
        Ok(self.summary("variance")?.variance)
    }

    /// Standard deviation of the replicate values, i.e. the bootstrap standard error of the
    /// statistic
    pub fn std_dev(&self) -> Result<f64> {
        Ok(self.summary("standard deviation")?.std_dev)
    }

    fn summary(&self, what: &'static str) -> Result<Summary> {
        if self.observation_count() == 0 {
            return Err(Error::InsufficientData(what));
        }

        Ok(self.cache.get(&self.replicates))
    }

    /// Computes a confidence interval at `confidence_level` from the replicate distribution
    ///
    /// Replicates that have not seen any observation take part with the empty value of `S`,
    /// which widens or shifts the interval on very short streams.
    pub fn confidence_interval(
        &self,
        confidence_level: f64,
        method: Method,
    ) -> Result<ConfidenceInterval> {
        crate::confidence::check_level(confidence_level)?;
        let summary = self.summary("confidence interval")?;

        ConfidenceInterval::compute(self.replicates.values(), &summary, confidence_level, method)
    }

    /// Like `confidence_interval`, with the method given by name (`"normal"`, `"percentile"`)
    ///
    /// The name is checked before anything else.
    pub fn confidence_interval_named(
        &self,
        confidence_level: f64,
        method: &str,
    ) -> Result<ConfidenceInterval> {
        let method = method.parse::<Method>()?;

        self.confidence_interval(confidence_level, method)
    }

    /// Confidence interval at the configured level and method
    pub fn default_confidence_interval(&self) -> Result<ConfidenceInterval> {
        self.confidence_interval(self.confidence_level, self.method)
    }

    /// Returns the value of every replicate
    pub fn replicate_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.replicates.values()
    }

    /// Returns the replicate estimators
    pub fn replicates(&self) -> &ReplicateSet<S> {
        &self.replicates
    }

    /// Returns the number of replicates
    pub fn nreplicates(&self) -> usize {
        self.replicates.len()
    }

    /// Returns the number of ingested observations
    pub fn observation_count(&self) -> u64 {
        self.base.nobs()
    }

    pub fn policy(&self) -> &ResamplingPolicy {
        &self.policy
    }

    /// Bootstraps can't be merged, see `ReplicateSet::merge`
    pub fn merge(&mut self, other: &Bootstrap<S>) -> Result<()> {
        self.replicates.merge(&other.replicates)
    }

    /// Returns the state as ordered `(name, value)` pairs
    ///
    /// Summary entries are left out until an observation has been ingested.
    pub fn report(&self) -> Vec<(&'static str, f64)> {
        let mut report = vec![("value", self.value())];

        if let Ok(summary) = self.summary("report") {
            report.push(("mean", summary.mean));
            report.push(("variance", summary.variance));
            report.push(("std_dev", summary.std_dev));
        }

        report.push(("nreplicates", cast::f64(self.nreplicates())));
        report.push(("nobs", cast::f64(self.observation_count())));
        report
    }
}

impl<'a, S> Sub for &'a Bootstrap<S>
where
    S: OnlineStat,
{
    type Output = Result<FrozenDifference>;

    fn sub(self, other: &'a Bootstrap<S>) -> Result<FrozenDifference> {
        FrozenDifference::new(self, other)
    }
}
