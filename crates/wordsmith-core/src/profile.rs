use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const BIRTHDATE_PATTERN: &str = r"^[0-3][0-9][0-1][0-9][0-9]{4}$";

/// Personal facts about the profiled subject.
///
/// Build one through [`ProfileRecord::normalized`] so that names are trimmed
/// and lowercased and dates are checked before the record reaches the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileRecord {
    pub name: String,
    pub surname: String,
    pub nickname: String,
    /// `DDMMYYYY` or empty.
    pub birthdate: String,
    pub partner_name: String,
    pub partner_nickname: String,
    pub partner_birthdate: String,
    pub child_name: String,
    pub child_nickname: String,
    pub child_birthdate: String,
    pub pet: String,
    pub company: String,
    pub keywords: Vec<String>,
}

impl ProfileRecord {
    /// Trim and lowercase every field, then validate the result.
    pub fn normalized(self) -> Result<Self> {
        let record = Self {
            name: normalize_name(&self.name),
            surname: normalize_name(&self.surname),
            nickname: normalize_name(&self.nickname),
            birthdate: self.birthdate.trim().to_string(),
            partner_name: normalize_name(&self.partner_name),
            partner_nickname: normalize_name(&self.partner_nickname),
            partner_birthdate: self.partner_birthdate.trim().to_string(),
            child_name: normalize_name(&self.child_name),
            child_nickname: normalize_name(&self.child_nickname),
            child_birthdate: self.child_birthdate.trim().to_string(),
            pet: normalize_name(&self.pet),
            company: normalize_name(&self.company),
            keywords: normalize_keywords(self.keywords.iter().map(String::as_str)),
        };
        record.validate()?;
        Ok(record)
    }

    /// Load a profile from a TOML file and normalize it.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::InvalidProfile(format!(
                "profile file {} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let record: ProfileRecord = toml::from_str(&content)?;
        record.normalized()
    }

    /// Check the preconditions of the profile pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidProfile(
                "a first name is required".to_string(),
            ));
        }
        for (field, value) in [
            ("birthdate", &self.birthdate),
            ("partner_birthdate", &self.partner_birthdate),
            ("child_birthdate", &self.child_birthdate),
        ] {
            if !is_valid_birthdate(value) {
                return Err(Error::InvalidProfile(format!(
                    "{field} must be empty or 8 digits in DDMMYYYY layout, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

/// Empty, or eight digits laid out as `DDMMYYYY`.
///
/// Only the layout is checked, so `31139999` passes.
pub fn is_valid_birthdate(value: &str) -> bool {
    value.is_empty() || birthdate_regex().is_some_and(|regex| regex.is_match(value))
}

/// Split a comma-separated keyword line into normalized keywords.
///
/// Spaces are removed, empty entries dropped and duplicates collapsed.
pub fn parse_keywords(line: &str) -> Vec<String> {
    normalize_keywords(line.split(','))
}

fn normalize_keywords<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(|value| {
            value
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}

fn birthdate_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(BIRTHDATE_PATTERN).ok()).as_ref()
}
