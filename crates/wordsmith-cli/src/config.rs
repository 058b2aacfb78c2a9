use std::path::{Path, PathBuf};

use wordsmith_core::{CONFIG_FILE_NAME, GeneratorConfig};

use crate::CliError;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    WorkingDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Flag(path) | Self::Env(path) | Self::WorkingDir(path) => Some(path),
            Self::Defaults => None,
        }
    }
}

/// Resolve the generator configuration.
///
/// An explicit flag wins over the environment variable, which wins over a
/// `wordsmith.toml` in `cwd`. Explicit and environment paths must exist; the
/// working-directory file is optional and the built-in defaults apply when it
/// is absent.
pub fn resolve_config(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    cwd: &Path,
) -> Result<(GeneratorConfig, ConfigSource), CliError> {
    let source = if let Some(path) = flag {
        ConfigSource::Flag(path.to_path_buf())
    } else if let Some(path) = env.filter(|path| !path.as_os_str().is_empty()) {
        ConfigSource::Env(path)
    } else {
        let local = cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            ConfigSource::WorkingDir(local)
        } else {
            ConfigSource::Defaults
        }
    };

    let config = match source.path() {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    Ok((config, source))
}
