//! Online statistics with streaming bootstrap confidence intervals.
//!
//! Wrap any [`OnlineStat`] in a [`Bootstrap`] to get a confidence interval for it without
//! keeping the data around: the bootstrap maintains `N` resampled replicates of the statistic
//! and updates them as observations stream in.
//!
//! ```
//! use bootstream::{Bootstrap, Method, ResamplingPolicy};
//! use bootstream::stat::Mean;
//!
//! let mut latency = Bootstrap::new(Mean::new(), 1000, ResamplingPolicy::poisson()).unwrap();
//! latency.ingest_batch((0..1000).map(|i| f64::from(i % 100)));
//!
//! let ci = latency.confidence_interval(0.95, Method::Percentile).unwrap();
//! assert!(ci.lower_bound < ci.upper_bound);
//! ```
//!
//! Two bootstraps over the same statistic can be subtracted, which freezes the replicate-wise
//! differences into a [`FrozenDifference`]:
//!
//! ```
//! use bootstream::{Bootstrap, ResamplingPolicy};
//! use bootstream::stat::Mean;
//!
//! let mut a = Bootstrap::new(Mean::new(), 500, ResamplingPolicy::bernoulli()).unwrap();
//! let mut b = Bootstrap::new(Mean::new(), 500, ResamplingPolicy::bernoulli()).unwrap();
//! a.ingest_batch(vec![1., 2., 3., 4.]);
//! b.ingest_batch(vec![2., 3., 4., 5.]);
//!
//! let diff = (&a - &b).unwrap();
//! assert_eq!(diff.nreplicates(), 500);
//! ```


pub mod bootstrap;
pub mod confidence;
pub mod config;
pub mod error;
pub mod stat;

mod fs;
mod rand_util;

pub use crate::bootstrap::{Bootstrap, FrozenDifference, ResamplingPolicy, Summary};
pub use crate::confidence::{ConfidenceInterval, Method, Tails};
pub use crate::config::BootstrapConfig;
pub use crate::error::{Error, Result};
pub use crate::stat::OnlineStat;
