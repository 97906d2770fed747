//! Sampler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopicaError};

/// Configuration for collapsed Gibbs sampling.
///
/// The topic count is fixed for the whole run; there is no convergence
/// check, the chain simply runs for `num_sweeps` full passes. Both
/// smoothing hyperparameters must be strictly positive so that every topic
/// keeps nonzero probability for every token (the chain stays ergodic).
///
/// # Examples
///
/// ```
/// use topica::sampler::GibbsConfig;
///
/// let config = GibbsConfig {
///     num_topics: 4,
///     num_sweeps: 200,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GibbsConfig {
    /// Number of topics (`K`); must be at least 1.
    pub num_topics: usize,
    /// Document-topic smoothing (Dirichlet prior on topic mixtures); > 0.
    pub alpha: f64,
    /// Topic-word smoothing (Dirichlet prior on word distributions); > 0.
    pub beta: f64,
    /// Number of full passes over every token occurrence. Zero is legal
    /// and returns the raw random initialization.
    pub num_sweeps: usize,
    /// Seed for the sampler's random number generator. The same corpus,
    /// configuration and seed reproduce the exact same topic trajectory.
    pub seed: u64,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        Self {
            num_topics: 10,
            alpha: 0.1,
            beta: 0.01,
            num_sweeps: 100,
            seed: 42,
        }
    }
}

impl GibbsConfig {
    /// Validate the configuration, rejecting it before any sampling begins.
    pub fn validate(&self) -> Result<()> {
        if self.num_topics < 1 {
            return Err(TopicaError::invalid_config(
                "num_topics must be at least 1",
            ));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(TopicaError::invalid_config(format!(
                "alpha must be strictly positive and finite, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(TopicaError::invalid_config(format!(
                "beta must be strictly positive and finite, got {}",
                self.beta
            )));
        }
        Ok(())
    }
}
