//! Sampler state: topic assignments and their sufficient statistics.
//!
//! Collapsed Gibbs sampling never materializes probability distributions.
//! The full sampler state is one topic label per token occurrence
//! ([`AssignmentStore`]) plus four integer count tables ([`CountTables`])
//! derived from those labels. The tables are maintained incrementally and
//! must, at every point between token updates, equal a from-scratch
//! recomputation off the assignment store.

pub mod assignments;
pub mod counts;

pub use assignments::AssignmentStore;
pub use counts::CountTables;
