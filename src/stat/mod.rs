//! Online estimators
//!
//! A bootstrap is generic over the statistic it resamples. Anything that can be updated one
//! observation at a time and read back as a scalar can be wrapped.

mod mean;
mod variance;

pub use self::mean::Mean;
pub use self::variance::Variance;

/// An incrementally updatable, single pass statistic
pub trait OnlineStat: Clone {
    /// Incorporates one observation
    fn update(&mut self, value: f64);

    /// Returns the current value of the statistic
    fn value(&self) -> f64;

    /// Returns the number of observations incorporated so far
    fn nobs(&self) -> u64;

    /// Folds the state of `other` into `self`, as if `self` had seen every observation of
    /// `other` as well
    fn merge(&mut self, other: &Self);

    /// Returns an empty instance that shares the configuration of `self`
    fn fresh(&self) -> Self;
}
