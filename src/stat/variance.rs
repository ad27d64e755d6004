use crate::stat::OnlineStat;

/// Running sample variance (Welford's algorithm)
///
/// Uses the `n - 1` denominator. Fewer than two observations yield `0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variance {
    mean: f64,
    m2: f64,
    n: u64,
}

impl Variance {
    /// Creates an empty variance
    pub fn new() -> Variance {
        Variance::default()
    }

    /// Returns the running mean of the observations
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the sample standard deviation
    pub fn std_dev(&self) -> f64 {
        self.value().sqrt()
    }
}

impl OnlineStat for Variance {
    fn update(&mut self, value: f64) {
        self.n += 1;

        let delta = value - self.mean;
        self.mean += delta / cast::f64(self.n);
        self.m2 += delta * (value - self.mean);
    }

    fn value(&self) -> f64 {
        if self.n < 2 {
            0.
        } else {
            self.m2 / cast::f64(self.n - 1)
        }
    }

    fn nobs(&self) -> u64 {
        self.n
    }

    // Chan et al. parallel update
    fn merge(&mut self, other: &Variance) {
        if other.n == 0 {
            return;
        }

        let n = self.n + other.n;
        let delta = other.mean - self.mean;
        let (na, nb, nn) = (cast::f64(self.n), cast::f64(other.n), cast::f64(n));

        self.mean += delta * nb / nn;
        self.m2 += other.m2 + delta * delta * na * nb / nn;
        self.n = n;
    }

    fn fresh(&self) -> Variance {
        Variance::new()
    }
}
