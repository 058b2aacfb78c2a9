use std::time::Instant;

use tracing::{debug, info, warn};

use wordsmith_core::{GeneratorConfig, ImproveOptions, OptionFlags, ProfileRecord};

use crate::errors::GenerationError;
use crate::finalize::finalize;
use crate::fragments::FragmentSet;
use crate::generators::{concat, pairwise_concat, special_suffixes, suffix_numbers};
use crate::model::{CandidatePool, GenerationReport, Pipeline};
use crate::variants::ProfileVariants;

/// Sorted wordlist plus the report describing how it was built.
#[derive(Debug, Clone)]
pub struct Generation {
    pub words: Vec<String>,
    pub report: GenerationReport,
}

/// Entry point for both generation pipelines.
///
/// The engine only reads its configuration, so one instance can serve any
/// number of runs.
#[derive(Debug, Clone)]
pub struct CandidateEngine {
    config: GeneratorConfig,
}

impl CandidateEngine {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a wordlist from personal facts.
    pub fn profile(
        &self,
        record: &ProfileRecord,
        flags: OptionFlags,
    ) -> Result<Generation, GenerationError> {
        record.validate()?;
        let start = Instant::now();
        info!(
            pipeline = "profile",
            special_chars = flags.special_chars,
            numeric_suffixes = flags.numeric_suffixes,
            leet = flags.leet,
            "generation started"
        );

        let pool = self.assemble_profile(record, flags);
        Ok(self.finish(Pipeline::Profile, pool, flags, start))
    }

    /// Expand an existing wordlist.
    pub fn improve(
        &self,
        tokens: &[String],
        options: ImproveOptions,
    ) -> Result<Generation, GenerationError> {
        let start = Instant::now();
        info!(
            pipeline = "improve",
            tokens = tokens.len(),
            concatenate = options.concatenate,
            special_chars = options.flags.special_chars,
            numeric_suffixes = options.flags.numeric_suffixes,
            leet = options.flags.leet,
            "generation started"
        );

        let pool = self.assemble_improve(tokens, options)?;
        Ok(self.finish(Pipeline::Improve, pool, options.flags, start))
    }

    /// Candidate pool of the profile pipeline, before leet and filtering.
    ///
    /// `record` must already satisfy [`ProfileRecord::validate`].
    pub fn assemble_profile(&self, record: &ProfileRecord, flags: OptionFlags) -> CandidatePool {
        let years = &self.config.years;
        let specials = self.specials(flags);

        let subject_dates = FragmentSet::derive(&record.birthdate);
        let partner_dates = FragmentSet::derive(&record.partner_birthdate);
        let child_dates = FragmentSet::derive(&record.child_birthdate);

        let variants = ProfileVariants::from_profile(record);
        let subject = variants.subject.self_cross();
        let partner = variants.partner.self_cross();
        let child = variants.child.self_cross();
        let extras = &variants.extras;
        let keywords = &variants.keywords;
        let reversed = &variants.reversed;
        let reversed_all = reversed.all();

        let mut pool = CandidatePool::new();

        pool.extend(concat(&subject, subject_dates.combinations()));
        pool.extend(concat(&partner, partner_dates.combinations()));
        pool.extend(concat(&child, child_dates.combinations()));
        for group in [&subject, extras, &partner, &child] {
            pool.extend(concat(group, years));
        }

        for dates in [&subject_dates, &partner_dates, &child_dates] {
            pool.extend(concat(keywords, dates.combinations()));
        }
        pool.extend(concat(keywords, years));

        pool.extend(concat(&reversed_all, years));
        pool.extend(concat(&reversed.subject, subject_dates.combinations()));
        pool.extend(concat(&reversed.partner, partner_dates.combinations()));
        pool.extend(concat(&reversed.child, child_dates.combinations()));

        for group in [keywords, &subject, extras, &partner, &child, &reversed_all] {
            self.add_suffixes(&mut pool, group, flags, &specials);
        }

        for group in [&subject, extras, &partner, &child, keywords, &reversed_all] {
            pool.extend(group);
        }
        for dates in [&subject_dates, &partner_dates, &child_dates] {
            pool.extend(dates.combinations());
        }

        debug!(pipeline = "profile", pool = pool.len(), "pool assembled");
        pool
    }

    /// Candidate pool of the improve pipeline, before leet and filtering.
    ///
    /// Fails before any pairing work when concatenation is requested for more
    /// tokens than the configured threshold.
    pub fn assemble_improve(
        &self,
        tokens: &[String],
        options: ImproveOptions,
    ) -> Result<CandidatePool, GenerationError> {
        let years = &self.config.years;
        let flags = options.flags;

        let concatenated = if options.concatenate {
            let limit = self.config.concat_threshold;
            if tokens.len() > limit {
                warn!(tokens = tokens.len(), limit, "concatenation threshold exceeded");
                return Err(GenerationError::ThresholdExceeded {
                    tokens: tokens.len(),
                    limit,
                });
            }
            pairwise_concat(tokens)
        } else {
            Vec::new()
        };
        let specials = self.specials(flags);

        let mut pool = CandidatePool::new();
        pool.extend(concat(tokens, years));
        pool.extend(concat(&concatenated, years));
        self.add_suffixes(&mut pool, tokens, flags, &specials);
        self.add_suffixes(&mut pool, &concatenated, flags, &specials);
        pool.extend(tokens);
        pool.extend(&concatenated);

        debug!(
            pipeline = "improve",
            concatenated = concatenated.len(),
            pool = pool.len(),
            "pool assembled"
        );
        Ok(pool)
    }

    fn specials(&self, flags: OptionFlags) -> Vec<String> {
        if flags.special_chars {
            special_suffixes(&self.config.special_chars)
        } else {
            Vec::new()
        }
    }

    fn add_suffixes(
        &self,
        pool: &mut CandidatePool,
        values: &[String],
        flags: OptionFlags,
        specials: &[String],
    ) {
        if flags.numeric_suffixes {
            pool.extend(suffix_numbers(values, self.config.numeric_range));
        }
        if flags.special_chars {
            pool.extend(concat(values, specials));
        }
    }

    fn finish(
        &self,
        pipeline: Pipeline,
        mut pool: CandidatePool,
        flags: OptionFlags,
        start: Instant,
    ) -> Generation {
        let mut report = GenerationReport::new(pipeline);
        report.pool_size = pool.len();
        if flags.leet {
            report.leet_added = pool.add_leet_variants(&self.config.leet);
        }

        let total = pool.len();
        let words = finalize(pool, self.config.length_bounds);
        report.rejected_by_length = total - words.len();
        report.emitted = words.len();
        report.duration_ms = start.elapsed().as_millis();

        info!(
            pipeline = ?pipeline,
            pool = report.pool_size,
            leet_added = report.leet_added,
            emitted = report.emitted,
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Generation { words, report }
    }
}

#[cfg(test)]
mod tests {
    use wordsmith_core::LengthBounds;

    use super::*;

    fn engine() -> CandidateEngine {
        CandidateEngine::new(GeneratorConfig {
            years: vec!["1990".to_string(), "2020".to_string()],
            special_chars: vec!["!".to_string()],
            numeric_range: wordsmith_core::NumericRange { from: 1, to: 3 },
            length_bounds: LengthBounds::new(0, 64),
            ..GeneratorConfig::default()
        })
    }

    fn record() -> ProfileRecord {
        ProfileRecord {
            name: "ana".to_string(),
            surname: "lima".to_string(),
            birthdate: "12101990".to_string(),
            partner_name: "rui".to_string(),
            partner_birthdate: "03041988".to_string(),
            child_name: "bia".to_string(),
            pet: "rex".to_string(),
            company: "acme".to_string(),
            keywords: vec!["guitar".to_string()],
            ..ProfileRecord::default()
        }
    }

    #[test]
    fn names_meet_their_own_dates_only() {
        let pool = engine().assemble_profile(&record(), OptionFlags::default());
        assert!(pool.contains("ana1210"));
        assert!(pool.contains("Lima90"));
        assert!(pool.contains("rui0304"));
        assert!(!pool.contains("ana0304"));
        assert!(!pool.contains("rui1210"));
    }

    #[test]
    fn keywords_meet_every_date_and_year() {
        let pool = engine().assemble_profile(&record(), OptionFlags::default());
        assert!(pool.contains("guitar1210"));
        assert!(pool.contains("Guitar0304"));
        assert!(pool.contains("guitar2020"));
    }

    #[test]
    fn extras_get_years_but_no_dates() {
        let pool = engine().assemble_profile(&record(), OptionFlags::default());
        assert!(pool.contains("rex1990"));
        assert!(pool.contains("Acme2020"));
        assert!(!pool.contains("rex1210"));
        assert!(!pool.contains("rexacme"));
    }

    #[test]
    fn reversed_names_get_years_and_own_dates() {
        let pool = engine().assemble_profile(&record(), OptionFlags::default());
        assert!(pool.contains("ana2020"));
        assert!(pool.contains("anA1990"));
        assert!(pool.contains("iur0304"));
        assert!(!pool.contains("iur1210"));
    }

    #[test]
    fn suffixes_follow_flags() {
        let engine = engine();
        let plain = engine.assemble_profile(&record(), OptionFlags::default());
        assert!(!plain.contains("rex!"));
        assert!(!plain.contains("rex1"));

        let flags = OptionFlags {
            special_chars: true,
            numeric_suffixes: true,
            leet: false,
        };
        let pool = engine.assemble_profile(&record(), flags);
        assert!(pool.contains("rex!!!"));
        assert!(pool.contains("rex2"));
        assert!(pool.contains("Guitar!"));
        assert!(pool.contains("aib1"));
        assert!(!pool.contains("rex3"));
    }

    #[test]
    fn profile_rejects_invalid_record() {
        let result = engine().profile(&ProfileRecord::default(), OptionFlags::default());
        assert!(matches!(result, Err(GenerationError::Core(_))));
    }

    #[test]
    fn leet_is_reported() {
        let tokens = vec!["test".to_string()];
        let options = ImproveOptions {
            flags: OptionFlags {
                leet: true,
                ..OptionFlags::default()
            },
            concatenate: false,
        };
        let generation = engine().improve(&tokens, options).expect("improve");
        assert!(generation.words.contains(&"7357".to_string()));
        assert!(generation.words.contains(&"73572020".to_string()));
        assert_eq!(generation.report.pipeline, Pipeline::Improve);
        assert!(generation.report.leet_added > 0);
        assert_eq!(generation.report.emitted, generation.words.len());
    }
}
