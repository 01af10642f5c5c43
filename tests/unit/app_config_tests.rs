/*!
 * Tests for application configuration
 */

use anyhow::Result;
use scriptcue::app_config::{Config, LogLevel, MarkupConfig, TimingConfig};

/// Test default configuration values
#[test]
fn test_config_default_shouldUseDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "ko");
    assert_eq!(config.voice, "ko-KR-SunHiNeural");
    assert_eq!(config.timing.min_duration, 1.5);
    assert_eq!(config.timing.max_duration, 6.0);
    assert_eq!(config.timing.chars_per_second, None);
    assert_eq!(config.markup.paragraph_break_ms, 800);
    assert_eq!(config.markup.sentence_break_ms, 300);
    assert_eq!(config.markup.rate, "+0%");
    assert_eq!(config.markup.pitch, "+0Hz");
    assert_eq!(config.markup.volume, "+0%");
    assert_eq!(config.markup.style, None);
    assert_eq!(config.markup.style_degree, 1.0);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_config_default_shouldValidate() -> Result<()> {
    Config::default().validate()
}

/// Test JSON serialization round trip
#[test]
fn test_config_serde_withRoundTrip_shouldPreserveValues() -> Result<()> {
    let mut config = Config::default();
    config.language = "en".to_string();
    config.timing.chars_per_second = Some(10.5);
    config.markup.style = Some("cheerful".to_string());

    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.language, "en");
    assert_eq!(parsed.timing.chars_per_second, Some(10.5));
    assert_eq!(parsed.markup.style, Some("cheerful".to_string()));
    assert_eq!(parsed.markup.paragraph_break_ms, 800);
    Ok(())
}

/// Test that a minimal config file fills in defaults
#[test]
fn test_config_serde_withMinimalJson_shouldApplyDefaults() -> Result<()> {
    let json = r#"{ "language": "ja", "voice": "ja-JP-NanamiNeural" }"#;
    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.language, "ja");
    assert_eq!(config.voice, "ja-JP-NanamiNeural");
    assert_eq!(config.timing.min_duration, 1.5);
    assert_eq!(config.markup.sentence_break_ms, 300);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test lowercase log level encoding
#[test]
fn test_log_level_serde_withLowercaseNames_shouldParse() -> Result<()> {
    let json = r#"{ "language": "ko", "voice": "v", "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json)?;
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test validation failures
#[test]
fn test_config_validate_withInvalidValues_shouldReject() {
    let mut config = Config::default();
    config.language = "nolang".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.voice = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.timing.min_duration = 7.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.timing.chars_per_second = Some(-1.0);
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.markup.sentence_break_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.markup.style_degree = 0.0;
    assert!(config.validate().is_err());
}

/// Test duration bounds helper
#[test]
fn test_timing_config_bounds_withValidValues_shouldBuildBounds() -> Result<()> {
    let timing = TimingConfig::default();
    let bounds = timing.bounds()?;
    assert_eq!(bounds.min_duration, 1.5);
    assert_eq!(bounds.max_duration, 6.0);
    Ok(())
}

/// Test markup helper conversions
#[test]
fn test_markup_config_helpers_shouldExposeTimingsAndProsody() {
    let markup = MarkupConfig::default();

    let timings = markup.break_timings();
    assert_eq!(timings.paragraph_ms, 800);
    assert_eq!(timings.sentence_ms, 300);

    let prosody = markup.prosody_options();
    assert_eq!(prosody.rate.as_deref(), Some("+0%"));
    assert_eq!(prosody.pitch.as_deref(), Some("+0Hz"));
    assert_eq!(prosody.volume.as_deref(), Some("+0%"));
}
