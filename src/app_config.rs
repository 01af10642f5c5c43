use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::markup::{BreakTimings, ProsodyOptions};
use crate::timing::DurationBounds;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Script language code (ISO 639-1)
    pub language: String,

    /// Synthesis voice identifier
    pub voice: String,

    /// Subtitle timing settings
    #[serde(default)]
    pub timing: TimingConfig,

    /// Speech-markup settings
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Subtitle timing configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimingConfig {
    /// Minimum subtitle display time in seconds
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,

    /// Maximum subtitle display time in seconds
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,

    /// Reading rate override in characters per second; the per-language
    /// table is used when unset
    #[serde(default)]
    pub chars_per_second: Option<f64>,
}

impl TimingConfig {
    /// Validated duration bounds for the allocator
    pub fn bounds(&self) -> Result<DurationBounds> {
        DurationBounds::new(self.min_duration, self.max_duration)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_duration: default_min_duration(),
            max_duration: default_max_duration(),
            chars_per_second: None,
        }
    }
}

/// Speech-markup generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkupConfig {
    /// Pause between paragraphs in milliseconds
    #[serde(default = "default_paragraph_break_ms")]
    pub paragraph_break_ms: u32,

    /// Pause between sentences in milliseconds
    #[serde(default = "default_sentence_break_ms")]
    pub sentence_break_ms: u32,

    /// Speaking rate offset, e.g. "+10%"
    #[serde(default = "default_rate")]
    pub rate: String,

    /// Pitch offset, e.g. "-5Hz"
    #[serde(default = "default_pitch")]
    pub pitch: String,

    /// Volume offset, e.g. "+20%"
    #[serde(default = "default_volume")]
    pub volume: String,

    /// Speaking style name; auto-break assembly is used when unset
    #[serde(default)]
    pub style: Option<String>,

    /// Style intensity, emitted only when different from 1.0
    #[serde(default = "default_style_degree")]
    pub style_degree: f64,
}

impl MarkupConfig {
    /// Pause lengths for the auto-break assembler
    pub fn break_timings(&self) -> BreakTimings {
        BreakTimings {
            paragraph_ms: self.paragraph_break_ms,
            sentence_ms: self.sentence_break_ms,
        }
    }

    /// Prosody overrides for assembled documents
    pub fn prosody_options(&self) -> ProsodyOptions {
        ProsodyOptions {
            rate: Some(self.rate.clone()),
            pitch: Some(self.pitch.clone()),
            volume: Some(self.volume.clone()),
        }
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            paragraph_break_ms: default_paragraph_break_ms(),
            sentence_break_ms: default_sentence_break_ms(),
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
            style: None,
            style_degree: default_style_degree(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_min_duration() -> f64 {
    1.5
}

fn default_max_duration() -> f64 {
    6.0
}

fn default_paragraph_break_ms() -> u32 {
    800
}

fn default_sentence_break_ms() -> u32 {
    300
}

fn default_rate() -> String {
    "+0%".to_string()
}

fn default_pitch() -> String {
    "+0Hz".to_string()
}

fn default_volume() -> String {
    "+0%".to_string()
}

fn default_style_degree() -> f64 {
    1.0
}

fn default_voice() -> String {
    "ko-KR-SunHiNeural".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the script language
        let _language_name = crate::language_utils::get_language_name(&self.language)?;

        if self.voice.trim().is_empty() {
            return Err(anyhow!("A synthesis voice identifier is required"));
        }

        // Validate timing bounds
        let _bounds = self.timing.bounds()?;

        if let Some(cps) = self.timing.chars_per_second {
            if cps <= 0.0 {
                return Err(anyhow!("chars_per_second must be positive, got {}", cps));
            }
        }

        if self.markup.paragraph_break_ms == 0 || self.markup.sentence_break_ms == 0 {
            return Err(anyhow!("Break durations must be positive"));
        }

        if self.markup.style_degree <= 0.0 {
            return Err(anyhow!(
                "style_degree must be positive, got {}",
                self.markup.style_degree
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: "ko".to_string(),
            voice: default_voice(),
            timing: TimingConfig::default(),
            markup: MarkupConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
