//! Confidence intervals over a bootstrap distribution

mod percentiles;

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::bootstrap::Summary;
use crate::error::{Error, Result};

pub use self::percentiles::Percentiles;

/// How to turn a replicate distribution into an interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// `mean ± z * std_dev`, with `z` the two-sided standard normal quantile
    Normal,
    /// Percentiles of the replicate values, interpolated linearly
    Percentile,
}

impl Default for Method {
    fn default() -> Method {
        Method::Percentile
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(name: &str) -> Result<Method> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Ok(Method::Normal),
            "percentile" | "quantile" => Ok(Method::Percentile),
            _ => Err(Error::UnsupportedMethod(name.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Normal => f.pad("normal"),
            Method::Percentile => f.pad("percentile"),
        }
    }
}

/// Number of tails for significance testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tails {
    /// One tailed test
    One,
    /// Two tailed test
    Two,
}

/// Lower and upper bound of a confidence interval
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub confidence_level: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ConfidenceInterval {
    /// Computes the interval at `confidence_level` from the replicate `values` and their
    /// `summary`
    ///
    /// - Time: `O(N)` for `Normal`, `O(N log N)` for `Percentile`
    pub fn compute<I>(
        values: I,
        summary: &Summary,
        confidence_level: f64,
        method: Method,
    ) -> Result<ConfidenceInterval>
    where
        I: IntoIterator<Item = f64>,
    {
        check_level(confidence_level)?;

        let (lower_bound, upper_bound) = match method {
            Method::Normal => {
                let z = z_score(confidence_level)?;
                let half_width = z * summary.std_dev;

                (summary.mean - half_width, summary.mean + half_width)
            }
            Method::Percentile => {
                let percentiles = Percentiles::new(values);
                if percentiles.as_slice().is_empty() {
                    return Err(Error::InsufficientData("percentile interval"));
                }

                (
                    percentiles.at(50. * (1. - confidence_level)),
                    percentiles.at(50. * (1. + confidence_level)),
                )
            }
        };

        Ok(ConfidenceInterval {
            confidence_level,
            lower_bound,
            upper_bound,
        })
    }

    /// Checks if `x` lies within the (closed) interval
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower_bound && x <= self.upper_bound
    }

    /// Returns `upper_bound - lower_bound`
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Returns the interval as a `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }
}

pub(crate) fn check_level(confidence_level: f64) -> Result<()> {
    if confidence_level > 0. && confidence_level < 1. {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "confidence level must lie in (0, 1), got {}",
            confidence_level
        )))
    }
}

/// Two-sided standard normal quantile, e.g. `1.96` for a 95% level
fn z_score(confidence_level: f64) -> Result<f64> {
    let normal = Normal::new(0., 1.).map_err(|e| Error::InvalidArgument(e.to_string()))?;

    Ok(normal.inverse_cdf(1. - (1. - confidence_level) / 2.))
}
