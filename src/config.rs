use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "jalaali.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct JalaaliConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Input handling settings.
    #[serde(default)]
    pub input: InputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: false,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for InputToml {
    fn default() -> Self {
        Self { strict: true }
    }
}

fn default_true() -> bool {
    true
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] is read
/// if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<JalaaliConfig> {
    match path {
        Some(path) => read(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.is_file() {
                read(default)
            } else {
                debug!("no config file, using defaults");
                Ok(JalaaliConfig::default())
            }
        }
    }
}

fn read(path: &Path) -> Result<JalaaliConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: JalaaliConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: JalaaliConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, "text");
        assert!(!config.output.pretty);
        assert!(config.input.strict);
    }

    #[test]
    fn full_toml() {
        let config: JalaaliConfig = toml::from_str(
            r#"
            [output]
            format = "json"
            pretty = true

            [input]
            strict = false
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty);
        assert!(!config.input.strict);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<JalaaliConfig, _> = toml::from_str("[output]\ncolour = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "[output]\nformat = \"json\"").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.output.format, "json");
        assert!(config.input.strict);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn load_malformed_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output\n").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}
