use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::GenerationError;
use crate::model::GenerationReport;

/// What a wordlist write produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordlistSummary {
    pub path: PathBuf,
    pub words: usize,
    pub bytes: u64,
}

/// Split a source wordlist into whitespace-separated tokens.
pub fn read_tokens(path: &Path) -> Result<Vec<String>, GenerationError> {
    if !path.is_file() {
        return Err(GenerationError::MissingSource(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Write one word per line.
///
/// Data goes to a `.tmp` sibling first and is renamed over `path` once synced.
pub fn write_wordlist(path: &Path, words: &[String]) -> Result<WordlistSummary, GenerationError> {
    let tmp_path = temp_path(path)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    let mut writer = CountingWriter::new(BufWriter::new(file));
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    let bytes = writer.bytes_written();
    let file = writer.into_inner().into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&tmp_path, path)?;

    Ok(WordlistSummary {
        path: path.to_path_buf(),
        words: words.len(),
        bytes,
    })
}

/// Write the generation report as pretty JSON.
pub fn write_report(path: &Path, report: &GenerationReport) -> Result<(), GenerationError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerationError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output path {}", path.display()),
        ))
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
