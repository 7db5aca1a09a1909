//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "REPORTGEN_DATA_DIR";

/// Top-level reportgen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportgenConfig {
    /// Where the data files live.
    #[serde(default)]
    pub data: DataConfig,
}

/// Location and file names of the JSON data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the data files.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_students_file")]
    pub students_file: String,
    #[serde(default = "default_assessments_file")]
    pub assessments_file: String,
    #[serde(default = "default_questions_file")]
    pub questions_file: String,
    #[serde(default = "default_responses_file")]
    pub responses_file: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from("./data/")
}
fn default_students_file() -> String {
    "students.json".to_string()
}
fn default_assessments_file() -> String {
    "assessments.json".to_string()
}
fn default_questions_file() -> String {
    "questions.json".to_string()
}
fn default_responses_file() -> String {
    "student-responses.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            students_file: default_students_file(),
            assessments_file: default_assessments_file(),
            questions_file: default_questions_file(),
            responses_file: default_responses_file(),
        }
    }
}

impl DataConfig {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!(
            "{}{}{}",
            &result[..start],
            value,
            &result[start + end + 1..]
        );
        from = start + value.len();
    }
    result
}

/// Apply a data directory override and expand `${VAR}` references in it.
fn apply_overrides(mut config: ReportgenConfig, data_dir: Option<String>) -> ReportgenConfig {
    if let Some(dir) = data_dir.filter(|d| !d.is_empty()) {
        config.data.dir = PathBuf::from(dir);
    }
    let resolved = resolve_env_vars(&config.data.dir.to_string_lossy());
    config.data.dir = PathBuf::from(resolved);
    config
}

/// Load config from an explicit path, or search the well-known paths.
///
/// Search order without a path:
/// 1. `reportgen.toml` in the current directory
/// 2. `~/.config/reportgen/config.toml`
///
/// Environment variable override: `REPORTGEN_DATA_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<ReportgenConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("reportgen.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => ReportgenConfig::default(),
    };

    Ok(apply_overrides(config, std::env::var(DATA_DIR_ENV).ok()))
}

fn parse_config(path: &Path) -> Result<ReportgenConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<ReportgenConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("reportgen"))
}
