use std::io::Write;
use std::path::Path;

use wordsmith_core::{Error, GeneratorConfig, ProfileRecord};

#[test]
fn shipped_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../wordsmith.toml");
    let config = GeneratorConfig::from_path(&path).expect("load shipped config");
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn missing_config_file_is_invalid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = GeneratorConfig::from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn profile_file_is_normalized_on_load() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
name = "Maria "
surname = "Silva"
birthdate = "07031985"
pet = "Rex"
keywords = ["Blue Sky", "guitar"]
"#
    )
    .expect("write profile");

    let record = ProfileRecord::from_path(file.path()).expect("load profile");
    assert_eq!(record.name, "maria");
    assert_eq!(record.surname, "silva");
    assert_eq!(record.birthdate, "07031985");
    assert_eq!(record.pet, "rex");
    assert_eq!(
        record.keywords,
        vec!["bluesky".to_string(), "guitar".to_string()]
    );
}

#[test]
fn profile_file_without_name_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "surname = \"silva\"").expect("write profile");

    let result = ProfileRecord::from_path(file.path());
    assert!(matches!(result, Err(Error::InvalidProfile(_))));
}
