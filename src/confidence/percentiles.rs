/// A "view" into the percentiles of a set of values
pub struct Percentiles(Box<[f64]>);

impl Percentiles {
    /// Sorts `values`. `NaN`s are ordered after every other value.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Percentiles {
        let mut v: Vec<f64> = values.into_iter().collect();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan())));

        Percentiles(v.into_boxed_slice())
    }

    /// Returns the percentile at `p`%, interpolating linearly between order statistics
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range or if there are no values
    pub fn at(&self, p: f64) -> f64 {
        assert!((0. ..=100.).contains(&p));
        assert!(!self.0.is_empty());

        let len = self.0.len() - 1;

        if p == 100. {
            self.0[len]
        } else {
            let rank = (p / 100.) * cast::f64(len);
            let integer = rank.floor();
            let fraction = rank - integer;
            let n = integer as usize;
            let floor = self.0[n];
            let ceiling = self.0[(n + 1).min(len)];

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> f64 {
        self.at(50.)
    }

    /// Returns the sorted values
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
