use crate::stat::OnlineStat;

/// Running arithmetic mean
///
/// The mean of zero observations is reported as `0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mean {
    mean: f64,
    n: u64,
}

impl Mean {
    /// Creates an empty mean
    pub fn new() -> Mean {
        Mean::default()
    }
}

impl OnlineStat for Mean {
    fn update(&mut self, value: f64) {
        self.n += 1;
        self.mean += (value - self.mean) / cast::f64(self.n);
    }

    fn value(&self) -> f64 {
        self.mean
    }

    fn nobs(&self) -> u64 {
        self.n
    }

    fn merge(&mut self, other: &Mean) {
        if other.n == 0 {
            return;
        }

        let n = self.n + other.n;
        self.mean += (other.mean - self.mean) * (cast::f64(other.n) / cast::f64(n));
        self.n = n;
    }

    fn fresh(&self) -> Mean {
        Mean::new()
    }
}
