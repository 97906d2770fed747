//! The single-token update at the heart of collapsed Gibbs sampling.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{Result, TopicaError};
use crate::model::CountTables;

/// Resample the topic of one occurrence of word `w` in document `d`.
///
/// The occurrence's current label is first removed from all statistics so
/// that it cannot bias its own conditional (the "collapsed" `z_{-i}` form);
/// every candidate topic is then scored with
///
/// ```text
/// weight(k) = (doc_topic[d][k] + alpha) * (topic_word[k][w] + beta)
///             / (topic_total[k] + n * beta)
/// ```
///
/// and a new label is drawn proportional to the unnormalized weights and
/// reinserted. Both word-affinity counts are indexed by the candidate
/// topic `k`, never by the old label. The tables are updated in place, so
/// the very next token's conditional already sees this draw.
///
/// With `alpha` and `beta` strictly positive every weight is positive, so
/// a non-finite or non-positive total can only come from corrupted counts;
/// that case fails fast instead of being patched over.
pub(crate) fn resample_token(
    tables: &mut CountTables,
    d: usize,
    w: usize,
    old_topic: usize,
    alpha: f64,
    beta: f64,
    weights: &mut Vec<f64>,
    rng: &mut StdRng,
) -> Result<usize> {
    let num_topics = tables.num_topics();
    let smoothing_n = tables.total_tokens() as f64 * beta;

    tables.decrement(d, w, old_topic)?;

    weights.clear();
    let mut total_weight = 0.0;
    for k in 0..num_topics {
        let doc_affinity = f64::from(tables.doc_topic(d, k)) + alpha;
        let word_affinity = f64::from(tables.topic_word(k, w)) + beta;
        let topic_mass = f64::from(tables.topic_total(k)) + smoothing_n;
        let weight = doc_affinity * word_affinity / topic_mass;
        weights.push(weight);
        total_weight += weight;
    }

    if !total_weight.is_finite() || total_weight <= 0.0 {
        return Err(TopicaError::internal(format!(
            "degenerate weight vector (total {total_weight}) for word {w} in doc {d}"
        )));
    }

    // Inverse-CDF draw over the unnormalized weights. The final bucket
    // absorbs any floating-point shortfall in the cumulative sum.
    let target = rng.random::<f64>() * total_weight;
    let mut new_topic = num_topics - 1;
    let mut cumsum = 0.0;
    for (k, &weight) in weights.iter().enumerate() {
        cumsum += weight;
        if cumsum >= target {
            new_topic = k;
            break;
        }
    }

    tables.increment(d, w, new_topic);
    Ok(new_topic)
}
