use serde_derive::{Deserialize, Serialize};

use crate::bootstrap::replicates::ReplicateSet;
use crate::error::{Error, Result};
use crate::rand_util::Rng;
use crate::stat::OnlineStat;

/// Largest multiplicity a `Choice` policy may draw
pub const MAX_MULTIPLICITY: u32 = 16;

/// Decides how many times each replicate sees an incoming observation
///
/// Every variant approximates resampling with replacement without storing the stream: instead
/// of drawing `n` observations out of `n`, each observation gets a random multiplicity per
/// replicate. The multiplicities have mean 1 and variance 1, like the counts of multinomial
/// resampling, otherwise the spread of the replicates would not estimate the standard error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ResamplingPolicy {
    /// "Double-or-nothing": each replicate applies the observation twice with probability 1/2
    Bernoulli,
    /// Each replicate applies the observation `m ~ Poisson(1)` times
    Poisson,
    /// The multiplicity is drawn uniformly from the given multiset, e.g. `[0, 0, 1, 1, 1, 3]`
    ///
    /// The multiset must have mean 1, variance 1, and no entry above `MAX_MULTIPLICITY`.
    Choice { multiplicities: Vec<u32> },
}

impl Default for ResamplingPolicy {
    fn default() -> ResamplingPolicy {
        ResamplingPolicy::Bernoulli
    }
}

impl ResamplingPolicy {
    /// Double-or-nothing Bernoulli resampling
    pub fn bernoulli() -> ResamplingPolicy {
        ResamplingPolicy::Bernoulli
    }

    /// Poisson(1) resampling
    pub fn poisson() -> ResamplingPolicy {
        ResamplingPolicy::Poisson
    }

    /// Checks that the multiplicities have mean 1, variance 1 and a bounded maximum
    pub fn validate(&self) -> Result<()> {
        match self {
            ResamplingPolicy::Bernoulli | ResamplingPolicy::Poisson => Ok(()),
            ResamplingPolicy::Choice { multiplicities } => {
                if multiplicities.is_empty() {
                    return Err(Error::InvalidConfiguration(
                        "the set of multiplicities is empty".to_owned(),
                    ));
                }

                if let Some(&m) = multiplicities.iter().find(|&&m| m > MAX_MULTIPLICITY) {
                    return Err(Error::InvalidConfiguration(format!(
                        "multiplicity {} exceeds the maximum of {}",
                        m, MAX_MULTIPLICITY
                    )));
                }

                // Exact integer moments: mean 1 <=> sum = n, variance 1 <=> sum of squares = 2n
                let n = multiplicities.len() as u64;
                let sum: u64 = multiplicities.iter().map(|&m| u64::from(m)).sum();
                let sum_sq: u64 = multiplicities.iter().map(|&m| u64::from(m).pow(2)).sum();

                if sum != n || sum_sq != 2 * n {
                    return Err(Error::InvalidConfiguration(format!(
                        "multiplicities {:?} must have mean 1 and variance 1",
                        multiplicities
                    )));
                }

                Ok(())
            }
        }
    }

    /// Feeds `value` to every replicate with an independently drawn multiplicity
    ///
    /// - Time: `O(N)` draws
    pub fn resample<S>(&self, rng: &mut Rng, replicates: &mut ReplicateSet<S>, value: f64)
    where
        S: OnlineStat,
    {
        let n = replicates.len();

        // A lone replicate is a pass-through
        if n == 1 {
            if let ResamplingPolicy::Bernoulli = self {
                replicates.apply(0, value, 1);
                return;
            }
        }

        for i in 0..n {
            let times = self.multiplicity(rng);
            replicates.apply(i, value, times);
        }
    }

    /// Draws the number of times one replicate sees one observation
    pub fn multiplicity(&self, rng: &mut Rng) -> u32 {
        match self {
            ResamplingPolicy::Bernoulli => {
                if rng.rand_float() < 0.5 {
                    2
                } else {
                    0
                }
            }
            ResamplingPolicy::Poisson => poisson(rng),
            ResamplingPolicy::Choice { multiplicities } => {
                let i = rng.rand_range(0..multiplicities.len() as u64);
                multiplicities[i as usize]
            }
        }
    }
}

// Knuth's multiplication method for Poisson(1)
fn poisson(rng: &mut Rng) -> u32 {
    let limit = (-1f64).exp();
    let mut k = 0;
    let mut p = rng.rand_float();

    while p > limit {
        k += 1;
        p *= rng.rand_float();
    }

    k
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    use super::{ResamplingPolicy, MAX_MULTIPLICITY};
    use crate::bootstrap::replicates::ReplicateSet;
    use crate::error::Error;
    use crate::rand_util::{new_rng, seeded_rng};
    use crate::stat::{Mean, OnlineStat};

    const DRAWS: usize = 100_000;

    // (mean, variance) of the drawn multiplicities
    fn moments(policy: &ResamplingPolicy) -> (f64, f64) {
        let mut rng = seeded_rng(7);
        let draws: Vec<f64> = (0..DRAWS)
            .map(|_| f64::from(policy.multiplicity(&mut rng)))
            .collect();
        let mean = draws.iter().sum::<f64>() / DRAWS as f64;
        let var = draws.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / DRAWS as f64;

        (mean, var)
    }

    fn choice(multiplicities: Vec<u32>) -> ResamplingPolicy {
        ResamplingPolicy::Choice { multiplicities }
    }

    #[test]
    fn rejects_weights_that_distort_the_standard_error() {
        let bad = vec![
            choice(vec![]),
            choice(vec![0]),
            choice(vec![1]),
            choice(vec![u32::MAX]),
            choice(vec![0, 1, 2]),
            choice(vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 17]),
        ];

        for policy in bad {
            match policy.validate() {
                Err(Error::InvalidConfiguration(_)) => {}
                other => panic!("{:?} gave {:?}", policy, other),
            }
        }

        assert!(ResamplingPolicy::bernoulli().validate().is_ok());
        assert!(ResamplingPolicy::poisson().validate().is_ok());
        assert!(choice(vec![0, 2]).validate().is_ok());
        assert!(choice(vec![0, 0, 1, 1, 1, 3]).validate().is_ok());
    }

    #[test]
    fn double_or_nothing() {
        let policy = ResamplingPolicy::bernoulli();
        let mut rng = seeded_rng(1);

        for _ in 0..1000 {
            let m = policy.multiplicity(&mut rng);
            assert!(m == 0 || m == 2);
        }

        let (mean, var) = moments(&policy);
        assert_relative_eq!(mean, 1., epsilon = 0.02);
        assert_relative_eq!(var, 1., epsilon = 0.02);
    }

    #[test]
    fn poisson_has_unit_mean_and_variance() {
        let (mean, var) = moments(&ResamplingPolicy::poisson());

        assert_relative_eq!(mean, 1., epsilon = 0.02);
        assert_relative_eq!(var, 1., epsilon = 0.03);
    }

    #[test]
    fn choice_only_draws_from_the_set() {
        let policy = choice(vec![0, 0, 1, 1, 1, 3]);
        let mut rng = seeded_rng(3);

        for _ in 0..1000 {
            assert!([0, 1, 3].contains(&policy.multiplicity(&mut rng)));
        }

        let (mean, var) = moments(&policy);
        assert_relative_eq!(mean, 1., epsilon = 0.02);
        assert_relative_eq!(var, 1., epsilon = 0.03);
    }

    #[test]
    fn single_replicate_bernoulli_is_a_pass_through() {
        let mut replicates = ReplicateSet::new(&Mean::new(), 1).unwrap();
        let mut rng = new_rng();

        for i in 0..50 {
            ResamplingPolicy::bernoulli().resample(&mut rng, &mut replicates, f64::from(i));
        }

        let only = replicates.iter().next().unwrap();
        assert_eq!(only.nobs(), 50);
        assert_relative_eq!(only.value(), 24.5, epsilon = 1e-9);
    }

    quickcheck! {
        fn accepts_exactly_unit_moment_sets(multiplicities: Vec<u8>) -> TestResult {
            if multiplicities.is_empty() {
                return TestResult::discard();
            }

            let ms: Vec<u32> = multiplicities.iter().map(|&m| u32::from(m)).collect();
            let n = ms.len() as f64;
            let mean = ms.iter().map(|&m| f64::from(m)).sum::<f64>() / n;
            let var = ms.iter().map(|&m| (f64::from(m) - mean).powi(2)).sum::<f64>() / n;
            let bounded = ms.iter().all(|&m| m <= MAX_MULTIPLICITY);
            let unit = (mean - 1.).abs() < 1e-9 && (var - 1.).abs() < 1e-9;

            TestResult::from_bool(choice(ms).validate().is_ok() == (bounded && unit))
        }
    }

    quickcheck! {
        fn poisson_multiplicities_are_bounded(seed: u64) -> bool {
            let policy = ResamplingPolicy::poisson();
            let mut rng = seeded_rng(seed);

            (0..1000).all(|_| policy.multiplicity(&mut rng) < 20)
        }
    }
}
