//! Command implementations

pub mod benchmark;
pub mod candidates;
pub mod play;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use candidates::{CandidateList, list_candidates, parse_round};
pub use play::{PlayOutcome, run_play, run_play_stdio};
pub use solve::{SolveConfig, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
