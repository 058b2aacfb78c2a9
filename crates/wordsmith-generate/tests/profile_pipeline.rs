use wordsmith_core::{GeneratorConfig, LengthBounds, OptionFlags, ProfileRecord};
use wordsmith_generate::{CandidateEngine, GenerationError, Pipeline};

fn reference_config() -> GeneratorConfig {
    GeneratorConfig {
        years: vec!["1990".to_string(), "2020".to_string()],
        length_bounds: LengthBounds::new(5, 12),
        ..GeneratorConfig::default()
    }
}

fn named(name: &str) -> ProfileRecord {
    ProfileRecord {
        name: name.to_string(),
        ..ProfileRecord::default()
    }
    .normalized()
    .expect("valid profile")
}

#[test]
fn minimal_profile_produces_minimal_wordlist() {
    let engine = CandidateEngine::new(reference_config());
    let generation = engine
        .profile(&named("foo"), OptionFlags::default())
        .expect("profile run");

    assert_eq!(
        generation.words,
        [
            "Foo1990", "Foo2020", "foo1990", "foo2020", "ooF1990", "ooF2020", "oof1990",
            "oof2020"
        ]
    );
    assert_eq!(generation.report.pipeline, Pipeline::Profile);
    assert_eq!(generation.report.emitted, 8);
    assert_eq!(generation.report.leet_added, 0);
}

#[test]
fn minimal_profile_with_leet_adds_substituted_copies() {
    let engine = CandidateEngine::new(reference_config());
    let flags = OptionFlags {
        leet: true,
        ..OptionFlags::default()
    };
    let generation = engine.profile(&named("foo"), flags).expect("profile run");

    for word in ["f001990", "F002020", "00F1990", "00f2020", "foo1990"] {
        assert!(generation.words.contains(&word.to_string()), "missing {word}");
    }
    assert_eq!(generation.words.len(), 16);
}

#[test]
fn output_is_sorted_unique_and_bounded() {
    let engine = CandidateEngine::new(GeneratorConfig::default());
    let record = ProfileRecord {
        name: "Maria".to_string(),
        surname: "Silva".to_string(),
        nickname: "mary".to_string(),
        birthdate: "07031985".to_string(),
        partner_name: "joao".to_string(),
        partner_birthdate: "21111983".to_string(),
        child_name: "lia".to_string(),
        child_birthdate: "02022015".to_string(),
        pet: "bolt".to_string(),
        company: "acme".to_string(),
        keywords: vec!["surf".to_string()],
        ..ProfileRecord::default()
    }
    .normalized()
    .expect("valid profile");
    let flags = OptionFlags {
        special_chars: true,
        numeric_suffixes: true,
        leet: true,
    };

    let generation = engine.profile(&record, flags).expect("profile run");
    let words = &generation.words;

    assert!(!words.is_empty());
    assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(
        words
            .iter()
            .all(|word| (6..=11).contains(&word.chars().count()))
    );
    for expected in [
        "maria1985",
        "Silva0703",
        "mary!@#",
        "joao2111",
        "lia2015",
        "Bolt99",
        "surf1985",
        "m4r141985",
    ] {
        assert!(words.contains(&expected.to_string()), "missing {expected}");
    }
}

#[test]
fn birthdate_combinations_reach_the_output() {
    let engine = CandidateEngine::new(GeneratorConfig::default());
    let record = ProfileRecord {
        name: "al".to_string(),
        birthdate: "12101990".to_string(),
        ..ProfileRecord::default()
    }
    .normalized()
    .expect("valid profile");

    let generation = engine
        .profile(&record, OptionFlags::default())
        .expect("profile run");
    // Raw fragment combinations are candidates on their own.
    assert!(generation.words.contains(&"121990".to_string()));
    assert!(generation.words.contains(&"199012".to_string()));
    assert!(generation.words.contains(&"al121990".to_string()));
    assert!(generation.words.contains(&"Al101290".to_string()));
}

#[test]
fn missing_name_is_rejected_before_assembly() {
    let engine = CandidateEngine::new(reference_config());
    let result = engine.profile(&ProfileRecord::default(), OptionFlags::default());
    assert!(matches!(result, Err(GenerationError::Core(_))));
}
