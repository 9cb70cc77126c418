//! Rendering of command results as text or JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use jalaali_calendar::{CalendarMoment, GregorianDate, JalaaliDate};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved runtime settings, built from the TOML config and CLI overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pretty: bool,
    /// Reject invalid input dates instead of converting them anyway.
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: false,
            strict: true,
        }
    }
}

/// Plain-text form of a command result.
pub trait Render {
    fn text(&self) -> String;
}

impl Render for JalaaliDate {
    fn text(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.jy, self.jm, self.jd)
    }
}

impl Render for GregorianDate {
    fn text(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.gy, self.gm, self.gd)
    }
}

impl Render for CalendarMoment {
    fn text(&self) -> String {
        format!(
            "{}T{:02}:{:02}:{:02}.{:03}",
            self.date().text(),
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

/// Renders `value` according to `settings`.
pub fn render<T: Render + Serialize>(value: &T, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Text => Ok(value.text()),
        OutputFormat::Json if settings.pretty => {
            serde_json::to_string_pretty(value).context("failed to serialize JSON output")
        }
        OutputFormat::Json => {
            serde_json::to_string(value).context("failed to serialize JSON output")
        }
    }
}
