//! Link configuration

use crate::LinkError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix (`SAMPLE_LINK_MAX_SAMPLES_PER_FRAME`, ...)
const ENV_PREFIX: &str = "SAMPLE_LINK";

/// What to do with a new sample when the buffer is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Evict the oldest unsent sample
    #[default]
    Overwrite,
    /// Refuse the new sample and report overflow
    Reject,
}

/// Sample link configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Upper bound on samples carried by one frame
    pub max_samples_per_frame: u16,

    /// Behaviour when the staging buffer is full
    pub overflow: OverflowPolicy,

    /// Sequence number of the first frame
    pub start_sequence: u16,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_samples_per_frame: 32,
            overflow: OverflowPolicy::Overwrite,
            start_sequence: 0,
        }
    }
}

impl LinkConfig {
    /// Small frames, sent as soon as a few samples are available
    pub fn low_latency() -> Self {
        Self {
            max_samples_per_frame: 4,
            ..Default::default()
        }
    }

    /// Load defaults, then the optional file, then `SAMPLE_LINK_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self, LinkError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, LinkError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default(
                "max_samples_per_frame",
                i64::from(defaults.max_samples_per_frame),
            )?
            .set_default("overflow", "overwrite")?
            .set_default("start_sequence", i64::from(defaults.start_sequence))?;

        if let Some(path) = path {
            debug!("Loading link configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the link cannot operate with
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.max_samples_per_frame == 0 {
            return Err(LinkError::InvalidConfig(
                "max_samples_per_frame must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
