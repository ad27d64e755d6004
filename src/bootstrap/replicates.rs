use std::slice;

use crate::error::{Error, Result};
use crate::stat::OnlineStat;

/// `N` independent copies of a statistic, one per bootstrap replicate
#[derive(Clone, Debug, PartialEq)]
pub struct ReplicateSet<S> {
    replicates: Box<[S]>,
}

impl<S> ReplicateSet<S>
where
    S: OnlineStat,
{
    /// Builds `n` fresh copies of `template`
    pub fn new(template: &S, n: usize) -> Result<ReplicateSet<S>> {
        if n == 0 {
            return Err(Error::InvalidConfiguration(
                "a bootstrap needs at least one replicate".to_owned(),
            ));
        }

        Ok(ReplicateSet {
            replicates: (0..n).map(|_| template.fresh()).collect(),
        })
    }

    /// Feeds `value` to the replicate at `index`, `times` times
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds
    pub fn apply(&mut self, index: usize, value: f64, times: u32) {
        let replicate = &mut self.replicates[index];

        for _ in 0..times {
            replicate.update(value);
        }
    }

    /// Returns the current value of every replicate, in order
    ///
    /// Recomputed on every call.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.replicates.iter().map(OnlineStat::value)
    }

    /// Returns the number of replicates
    pub fn len(&self) -> usize {
        self.replicates.len()
    }

    /// Always `false`, a replicate set holds at least one replicate
    pub fn is_empty(&self) -> bool {
        self.replicates.is_empty()
    }

    /// Iterates over the replicate estimators
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.replicates.iter()
    }

    /// Replicate sets can't be merged: every replicate is an independent resample of its own
    /// stream, so there is no meaningful pairing with another set's replicates
    pub fn merge(&mut self, other: &ReplicateSet<S>) -> Result<()> {
        Err(Error::IncompatibleOperation(format!(
            "replicate sets can not be merged ({} and {} replicates)",
            self.len(),
            other.len()
        )))
    }
}

#[cfg(test)]
mod test {
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    use super::ReplicateSet;
    use crate::error::Error;
    use crate::stat::{Mean, OnlineStat};

    #[test]
    fn zero_replicates_is_a_configuration_error() {
        match ReplicateSet::new(&Mean::new(), 0) {
            Err(Error::InvalidConfiguration(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn replicates_start_fresh() {
        let mut template = Mean::new();
        template.update(10.);

        let replicates = ReplicateSet::new(&template, 3).unwrap();

        assert!(replicates.iter().all(|r| r.nobs() == 0));
        assert_eq!(replicates.values().collect::<Vec<_>>(), vec![0., 0., 0.]);
    }

    #[test]
    fn apply_touches_a_single_replicate() {
        let mut replicates = ReplicateSet::new(&Mean::new(), 3).unwrap();
        replicates.apply(1, 4., 3);

        let nobs: Vec<_> = replicates.iter().map(OnlineStat::nobs).collect();
        assert_eq!(nobs, vec![0, 3, 0]);
        assert_eq!(replicates.values().collect::<Vec<_>>(), vec![0., 4., 0.]);
    }

    #[test]
    fn merging_is_unsupported() {
        let mut a = ReplicateSet::new(&Mean::new(), 3).unwrap();
        let b = ReplicateSet::new(&Mean::new(), 3).unwrap();

        match a.merge(&b) {
            Err(Error::IncompatibleOperation(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    quickcheck! {
        fn values_are_restartable(n: u8) -> TestResult {
            if n == 0 {
                return TestResult::discard();
            }

            let mut replicates = ReplicateSet::new(&Mean::new(), n as usize).unwrap();
            for i in 0..n as usize {
                replicates.apply(i, i as f64, 1);
            }

            let first: Vec<_> = replicates.values().collect();
            let second: Vec<_> = replicates.values().collect();

            TestResult::from_bool(first.len() == n as usize && first == second)
        }
    }
}
