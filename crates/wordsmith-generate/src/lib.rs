//! Candidate generation engine for wordsmith.
//!
//! Assembles password candidates from a personal profile or an existing
//! wordlist by crossing names, date fragments, years and suffixes, then
//! deduplicates, length-filters and sorts the pool.

pub mod engine;
pub mod errors;
pub mod finalize;
pub mod fragments;
pub mod generators;
pub mod model;
pub mod output;
pub mod variants;

pub use engine::{CandidateEngine, Generation};
pub use errors::GenerationError;
pub use finalize::finalize;
pub use fragments::FragmentSet;
pub use model::{CandidatePool, GenerationReport, Pipeline};
pub use output::{WordlistSummary, read_tokens, write_report, write_wordlist};
