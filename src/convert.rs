//! Pure conversion functions: TOML config structs -> runtime settings.

use anyhow::{Result, bail};

use crate::config::JalaaliConfig;
use crate::output::{OutputFormat, Settings};

/// Parses an output format name into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds [`Settings`] from the TOML configuration and an optional CLI
/// format override.
pub fn build_settings(config: &JalaaliConfig, format_override: Option<&str>) -> Result<Settings> {
    let format = parse_output_format(format_override.unwrap_or(&config.output.format))?;
    Ok(Settings {
        format,
        pretty: config.output.pretty,
        strict: config.input.strict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_formats() {
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        let err = parse_output_format("yaml").unwrap_err();
        assert_eq!(err.to_string(), "unknown output format: \"yaml\"");
    }

    #[test]
    fn defaults() {
        let settings = build_settings(&JalaaliConfig::default(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn cli_override_wins() {
        let settings = build_settings(&JalaaliConfig::default(), Some("json")).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.strict);
    }

    #[test]
    fn config_values_flow_through() {
        let config: JalaaliConfig = toml::from_str(
            "[output]\nformat = \"json\"\npretty = true\n[input]\nstrict = false\n",
        )
        .unwrap();
        let settings = build_settings(&config, None).unwrap();
        assert_eq!(
            settings,
            Settings {
                format: OutputFormat::Json,
                pretty: true,
                strict: false,
            }
        );
    }

    #[test]
    fn bad_format_in_config() {
        let config: JalaaliConfig = toml::from_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(build_settings(&config, None).is_err());
    }
}
