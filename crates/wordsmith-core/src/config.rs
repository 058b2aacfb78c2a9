use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable settings consumed by every generation pipeline.
///
/// Missing keys fall back to the built-in defaults, unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Year strings appended to names, keywords and source words.
    pub years: Vec<String>,
    /// Alphabet for special-character suffixes, one character per entry.
    pub special_chars: Vec<String>,
    /// Maximum number of source words accepted for pairwise concatenation.
    pub concat_threshold: usize,
    pub numeric_range: NumericRange,
    pub length_bounds: LengthBounds,
    pub leet: LeetTable,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            years: (1990..=2020).map(|year: u32| year.to_string()).collect(),
            special_chars: ["!", "@", "#", "$", "%", "&", "*"]
                .iter()
                .map(|ch| ch.to_string())
                .collect(),
            concat_threshold: 200,
            numeric_range: NumericRange::default(),
            length_bounds: LengthBounds::default(),
            leet: LeetTable::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::InvalidConfig(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants the generators rely on.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .special_chars
            .iter()
            .find(|value| value.chars().count() != 1)
        {
            return Err(Error::InvalidConfig(format!(
                "special_chars entries must be single characters, got '{bad}'"
            )));
        }
        if self.length_bounds.low >= self.length_bounds.high {
            return Err(Error::InvalidConfig(format!(
                "length_bounds.low ({}) must be below length_bounds.high ({})",
                self.length_bounds.low, self.length_bounds.high
            )));
        }
        if let Some((key, _)) = self
            .leet
            .entries()
            .into_iter()
            .find(|(_, substitute)| substitute.is_empty())
        {
            return Err(Error::InvalidConfig(format!(
                "leet substitute for '{key}' must not be empty"
            )));
        }
        Ok(())
    }
}

/// Half-open range of numbers used as suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub from: i64,
    pub to: i64,
}

impl Default for NumericRange {
    fn default() -> Self {
        Self { from: 0, to: 100 }
    }
}

impl NumericRange {
    /// An inverted range is empty rather than an error.
    pub fn range(&self) -> Range<i64> {
        self.from..self.to
    }

    pub fn len(&self) -> usize {
        usize::try_from(self.to.saturating_sub(self.from)).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }
}

/// Exclusive length bounds for emitted candidates, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub low: usize,
    pub high: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self { low: 5, high: 12 }
    }
}

impl LengthBounds {
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    pub fn admits(&self, value: &str) -> bool {
        let len = value.chars().count();
        self.low < len && len < self.high
    }
}

/// Letter to look-alike substitutions for leet mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeetTable {
    pub a: String,
    pub e: String,
    pub g: String,
    pub i: String,
    pub o: String,
    pub s: String,
    pub t: String,
    pub z: String,
}

impl Default for LeetTable {
    fn default() -> Self {
        Self {
            a: "4".to_string(),
            e: "3".to_string(),
            g: "9".to_string(),
            i: "1".to_string(),
            o: "0".to_string(),
            s: "5".to_string(),
            t: "7".to_string(),
            z: "2".to_string(),
        }
    }
}

impl LeetTable {
    /// Substitutions in the order they are applied.
    pub fn entries(&self) -> [(char, &str); 8] {
        [
            ('a', self.a.as_str()),
            ('e', self.e.as_str()),
            ('g', self.g.as_str()),
            ('i', self.i.as_str()),
            ('o', self.o.as_str()),
            ('s', self.s.as_str()),
            ('t', self.t.as_str()),
            ('z', self.z.as_str()),
        ]
    }
}
