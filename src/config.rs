// ⚙️ Configuration
// - CleaverOptions: per-call failure policy for the library
// - BatchConfig: what the CLI batch driver reads and writes

use clap::ValueEnum;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the tracing filter for the binary
pub const LOG_ENV_VAR: &str = "NAME_CLEAVER_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// CLEAVER OPTIONS
// ============================================================================

/// Failure policy for a parse call.
///
/// Strict (default) raises `UnparseableName`; safe mode hands back the
/// original input so batch jobs can skip the record instead of aborting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaverOptions {
    pub safe: bool,
}

impl CleaverOptions {
    pub fn strict() -> Self {
        CleaverOptions { safe: false }
    }

    pub fn safe() -> Self {
        CleaverOptions { safe: true }
    }

    pub fn from_flag(safe: bool) -> Self {
        CleaverOptions { safe }
    }
}

// ============================================================================
// BATCH CONFIG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Individual,
    Politician,
    Organization,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Individual => "individual",
            NameKind::Politician => "politician",
            NameKind::Organization => "organization",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// raw,cleaned rows
    #[default]
    Csv,
    /// one JSON object per record, structured fields included
    Jsonl,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input: PathBuf,
    /// None writes to stdout
    pub output: Option<PathBuf>,
    pub kind: NameKind,
    /// Header of the column holding raw names
    pub column: String,
    pub options: CleaverOptions,
    pub format: OutputFormat,
}

impl BatchConfig {
    pub fn new(input: impl Into<PathBuf>, kind: NameKind) -> Self {
        BatchConfig {
            input: input.into(),
            output: None,
            kind,
            column: "name".to_string(),
            options: CleaverOptions::default(),
            format: OutputFormat::default(),
        }
    }
}

/// Tracing filter directive from the environment, `info` when unset
pub fn log_filter() -> String {
    env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_strict() {
        assert_eq!(CleaverOptions::default(), CleaverOptions::strict());
        assert!(CleaverOptions::safe().safe);
        assert!(CleaverOptions::from_flag(true).safe);
    }

    #[test]
    fn test_batch_config_defaults() {
        let config = BatchConfig::new("names.csv", NameKind::Politician);
        assert_eq!(config.column, "name");
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.output.is_none());
        assert!(!config.options.safe);
        assert_eq!(config.kind.to_string(), "politician");
    }
}
