use serde::{Deserialize, Serialize};

/// Optional expansions applied by both pipelines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionFlags {
    /// Append every special-character suffix.
    pub special_chars: bool,
    /// Append every number of the configured numeric range.
    pub numeric_suffixes: bool,
    /// Add a leet-substituted copy of every candidate.
    pub leet: bool,
}

/// Options for improving an existing wordlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImproveOptions {
    pub flags: OptionFlags,
    /// Concatenate every pair of words in the source list.
    pub concatenate: bool,
}
