use std::collections::BTreeSet;
use std::path::Path;

use wordsmith_generate::{WordlistSummary, write_wordlist};

use crate::CliError;

const USERNAME_COLUMN: usize = 5;
const PASSWORD_COLUMN: usize = 6;

#[derive(Debug)]
pub struct ExtractSummary {
    pub usernames: WordlistSummary,
    pub passwords: WordlistSummary,
    pub skipped_rows: usize,
}

/// Split a default-credentials CSV into sorted unique username and password
/// lists written as `<prefix>-usernames.txt` and `<prefix>-passwords.txt`.
///
/// Rows are header-less and may vary in width; rows too short to carry both
/// columns are skipped. Empty cells are not emitted.
pub fn extract_credentials(
    source: &Path,
    out_dir: &Path,
    prefix: &str,
) -> Result<ExtractSummary, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(source)?;

    let mut usernames = BTreeSet::new();
    let mut passwords = BTreeSet::new();
    let mut skipped_rows = 0usize;

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let (Some(username), Some(password)) =
            (record.get(USERNAME_COLUMN), record.get(PASSWORD_COLUMN))
        else {
            tracing::debug!(event = "row_skipped", row = index, columns = record.len());
            skipped_rows += 1;
            continue;
        };
        if !username.is_empty() {
            usernames.insert(username.to_string());
        }
        if !password.is_empty() {
            passwords.insert(password.to_string());
        }
    }

    let usernames: Vec<String> = usernames.into_iter().collect();
    let passwords: Vec<String> = passwords.into_iter().collect();
    let usernames = write_wordlist(&out_dir.join(format!("{prefix}-usernames.txt")), &usernames)?;
    let passwords = write_wordlist(&out_dir.join(format!("{prefix}-passwords.txt")), &passwords)?;

    tracing::info!(
        event = "credentials_extracted",
        source = %source.display(),
        usernames = usernames.words,
        passwords = passwords.words,
        skipped_rows
    );

    Ok(ExtractSummary {
        usernames,
        passwords,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1,acme,router,v1,http,admin,admin
2,acme,switch,v2,telnet,root,toor
3,globex,camera,,http,admin,1234
4,short,row
5,initech,printer,x,http,,blank
";

    #[test]
    fn splits_columns_into_sorted_unique_lists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("alectodb.csv");
        std::fs::write(&source, SAMPLE).expect("write csv");

        let summary = extract_credentials(&source, dir.path(), "alectodb").expect("extract");

        assert_eq!(summary.skipped_rows, 1);
        assert_eq!(summary.usernames.words, 2);
        assert_eq!(summary.passwords.words, 4);
        let usernames = std::fs::read_to_string(dir.path().join("alectodb-usernames.txt"))
            .expect("read usernames");
        assert_eq!(usernames, "admin\nroot\n");
        let passwords = std::fs::read_to_string(dir.path().join("alectodb-passwords.txt"))
            .expect("read passwords");
        assert_eq!(passwords, "1234\nadmin\nblank\ntoor\n");
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("creds.csv");
        std::fs::write(&source, "1,a,b,c,d,\"ops,team\",\"p,w\"\n").expect("write csv");

        let summary = extract_credentials(&source, dir.path(), "creds").expect("extract");
        assert_eq!(summary.usernames.words, 1);
        let passwords =
            std::fs::read_to_string(dir.path().join("creds-passwords.txt")).expect("read");
        assert_eq!(passwords, "p,w\n");
    }

    #[test]
    fn missing_csv_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = extract_credentials(&dir.path().join("nope.csv"), dir.path(), "nope");
        assert!(matches!(result, Err(CliError::Csv(_))));
    }
}
