//! Bootstrap configuration
//!
//! ```
//! use bootstream::{BootstrapConfig, Method, ResamplingPolicy};
//!
//! let config = BootstrapConfig::default()
//!     .nreplicates(500)
//!     .policy(ResamplingPolicy::poisson())
//!     .confidence_level(0.99)
//!     .method(Method::Normal)
//!     .seed(42);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::bootstrap::ResamplingPolicy;
use crate::confidence::{check_level, Method};
use crate::error::{Error, Result};
use crate::fs;

/// Settings shared by every bootstrap built from them
///
/// Missing fields take their default value when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub nreplicates: usize,
    pub policy: ResamplingPolicy,
    /// `None` seeds every bootstrap differently
    pub seed: Option<u64>,
    pub confidence_level: f64,
    pub method: Method,
}

impl Default for BootstrapConfig {
    fn default() -> BootstrapConfig {
        BootstrapConfig {
            nreplicates: 1000,
            policy: ResamplingPolicy::default(),
            seed: None,
            confidence_level: 0.95,
            method: Method::default(),
        }
    }
}

impl BootstrapConfig {
    /// Reads a JSON encoded configuration
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BootstrapConfig> {
        let config: BootstrapConfig = fs::load(&path)?;
        config.validate()?;

        debug!("loaded {:?} from {:?}", config, path.as_ref());

        Ok(config)
    }

    /// Changes the number of replicates. Defaults to 1000.
    pub fn nreplicates(mut self, n: usize) -> BootstrapConfig {
        self.nreplicates = n;
        self
    }

    /// Changes the resampling policy. Defaults to double-or-nothing Bernoulli resampling.
    pub fn policy(mut self, policy: ResamplingPolicy) -> BootstrapConfig {
        self.policy = policy;
        self
    }

    /// Makes the resampling reproducible
    pub fn seed(mut self, seed: u64) -> BootstrapConfig {
        self.seed = Some(seed);
        self
    }

    /// Changes the level used by `Bootstrap::default_confidence_interval`. Defaults to 0.95.
    pub fn confidence_level(mut self, cl: f64) -> BootstrapConfig {
        self.confidence_level = cl;
        self
    }

    /// Changes the method used by `Bootstrap::default_confidence_interval`. Defaults to
    /// percentiles.
    pub fn method(mut self, method: Method) -> BootstrapConfig {
        self.method = method;
        self
    }

    /// Checks every setting
    pub fn validate(&self) -> Result<()> {
        if self.nreplicates == 0 {
            return Err(Error::InvalidConfiguration(
                "a bootstrap needs at least one replicate".to_owned(),
            ));
        }

        self.policy.validate()?;

        check_level(self.confidence_level)
            .map_err(|_| {
                Error::InvalidConfiguration(format!(
                    "confidence level must lie in (0, 1), got {}",
                    self.confidence_level
                ))
            })
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::BootstrapConfig;
    use crate::bootstrap::ResamplingPolicy;
    use crate::confidence::Method;
    use crate::error::Error;

    fn write(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_partial_json() {
        let file = write(r#"{ "nreplicates": 250, "policy": "Poisson" }"#);

        let config = BootstrapConfig::load(file.path()).unwrap();

        assert_eq!(
            config,
            BootstrapConfig::default()
                .nreplicates(250)
                .policy(ResamplingPolicy::poisson())
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config = BootstrapConfig::default()
            .method(Method::Normal)
            .confidence_level(0.9)
            .seed(3);
        let json = serde_json::to_string(&config).unwrap();

        let file = write(&json);
        assert_eq!(BootstrapConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn rejects_invalid_values() {
        let file = write(r#"{ "nreplicates": 0 }"#);

        assert!(matches!(
            BootstrapConfig::load(file.path()),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BootstrapConfig::default().confidence_level(1.).validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let file = write(r#"{ "policy": { "Choice": { "multiplicities": [0] } } }"#);
        assert!(matches!(
            BootstrapConfig::load(file.path()),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn reports_io_and_parse_errors() {
        let file = write("not json");

        assert!(matches!(
            BootstrapConfig::load(file.path()),
            Err(Error::SerdeError { .. })
        ));
        assert!(matches!(
            BootstrapConfig::load("/definitely/not/here.json"),
            Err(Error::AccessError { .. })
        ));
    }
}
