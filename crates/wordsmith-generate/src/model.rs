use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wordsmith_core::LeetTable;

use crate::generators::leet;

/// Deduplicated working set of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    entries: HashSet<String>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: String) -> bool {
        self.entries.insert(candidate)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Add the leet form of every current member, keeping the originals.
    ///
    /// Returns how many new entries were added.
    pub fn add_leet_variants(&mut self, table: &LeetTable) -> usize {
        let substituted: Vec<String> = self
            .entries
            .iter()
            .map(|candidate| leet(candidate, table))
            .collect();
        let before = self.entries.len();
        self.entries.extend(substituted);
        self.entries.len() - before
    }

    pub fn into_inner(self) -> HashSet<String> {
        self.entries
    }
}

impl Extend<String> for CandidatePool {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> Extend<&'a String> for CandidatePool {
    fn extend<I: IntoIterator<Item = &'a String>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().cloned());
    }
}

impl FromIterator<String> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Which pipeline produced a wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pipeline {
    Profile,
    Improve,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub pipeline: Pipeline,
    pub generated_at: String,
    /// Distinct candidates before leet and length filtering.
    pub pool_size: usize,
    pub leet_added: usize,
    pub rejected_by_length: usize,
    pub emitted: usize,
    pub duration_ms: u128,
}

impl GenerationReport {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            generated_at: chrono::Utc::now().to_rfc3339(),
            pool_size: 0,
            leet_added: 0,
            rejected_by_length: 0,
            emitted: 0,
            duration_ms: 0,
        }
    }
}
