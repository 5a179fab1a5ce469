//! Search: fixed-depth alpha-beta, root move selection, root parallelism.

mod alphabeta;
mod parallel;
mod searcher;
mod types;

pub use alphabeta::{alpha_beta, minimax};
pub use searcher::Searcher;
pub use types::{ScoredMove, SearchConfig, SearchStats, INFINITY};
