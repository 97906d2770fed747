//! Collapsed Gibbs sampler for LDA.
//!
//! The sampler treats the per-occurrence topic labels as the only latent
//! variables, having marginalized out the topic and word distributions;
//! the conditional for each label depends only on the integer count tables
//! in [`crate::model`]. One *sweep* resamples every token occurrence in
//! the corpus exactly once, in document order then position order, and the
//! chain runs for a fixed number of sweeps with no convergence check.
//!
//! Updates are applied immediately: the conditional drawn for a token sees
//! the post-update state left by every token processed before it in the
//! same sweep. That sequential dependency is what makes the chain target
//! the right stationary distribution, and it is also why the sweep loop is
//! strictly single-threaded.

pub mod config;
pub(crate) mod init;
pub(crate) mod resample;

pub use config::GibbsConfig;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::estimates::TopicModel;
use crate::model::CountTables;

/// Collapsed Gibbs sampler over a fixed number of topics.
///
/// Construction validates the configuration; a sampler that exists is
/// always runnable. Each call to [`fit`](GibbsSampler::fit) reseeds the
/// generator from the configured seed, so fitting the same corpus twice
/// yields bit-identical models.
///
/// # Examples
///
/// ```
/// use topica::corpus::Corpus;
/// use topica::sampler::{GibbsConfig, GibbsSampler};
///
/// let corpus = Corpus::from_slices(&[
///     &["cat", "dog", "cat"],
///     &["dog", "fish"],
/// ]);
///
/// let config = GibbsConfig {
///     num_topics: 2,
///     num_sweeps: 50,
///     ..Default::default()
/// };
/// let sampler = GibbsSampler::new(config).unwrap();
/// let model = sampler.fit(&corpus).unwrap();
///
/// assert_eq!(model.counts().total_tokens(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct GibbsSampler {
    config: GibbsConfig,
}

impl GibbsSampler {
    /// Create a sampler, rejecting invalid configurations up front.
    pub fn new(config: GibbsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this sampler runs with.
    pub fn config(&self) -> &GibbsConfig {
        &self.config
    }

    /// Run the full chain on a corpus and return the fitted model.
    ///
    /// Initializes every occurrence with a uniform random label, then
    /// performs `num_sweeps` full sweeps. With `num_sweeps == 0` the raw
    /// initialization is returned unchanged. A corpus without any token
    /// occurrences is a degenerate no-op: the model comes back with empty
    /// tables and assignments, not an error. Empty documents inside a
    /// non-empty corpus contribute nothing and are skipped naturally.
    pub fn fit(&self, corpus: &Corpus) -> Result<TopicModel> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let (mut assignments, mut tables) =
            init::initialize(corpus, self.config.num_topics, &mut rng)?;

        let mut weights = Vec::with_capacity(self.config.num_topics);
        for _ in 0..self.config.num_sweeps {
            for d in 0..corpus.num_documents() {
                for (pos, &w) in corpus.document(d).iter().enumerate() {
                    let old_topic = assignments.topic(d, pos);
                    let new_topic = resample::resample_token(
                        &mut tables,
                        d,
                        w,
                        old_topic,
                        self.config.alpha,
                        self.config.beta,
                        &mut weights,
                        &mut rng,
                    )?;
                    assignments.set_topic(d, pos, new_topic);
                }
            }
            debug_assert!(tables.check_consistency().is_ok());
        }

        Ok(TopicModel::new(
            self.config.clone(),
            assignments,
            tables,
        ))
    }
}

/// Rebuild count tables directly from a model's final assignments.
///
/// Exposed for consumers that want to verify the recomputation-equivalence
/// property: the tables maintained incrementally across all sweeps must
/// exactly equal this from-scratch reconstruction.
pub fn recompute_tables(corpus: &Corpus, model: &TopicModel) -> Result<CountTables> {
    CountTables::from_assignments(corpus, model.assignments(), model.num_topics())
}
