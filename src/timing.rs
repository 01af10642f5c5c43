/*!
 * Timestamp allocation from a reading-speed model.
 *
 * Assigns a start/end time to each sentence from its character count and a
 * language-specific reading rate, optionally rescaled so the estimated
 * total matches a measured audio duration.
 */

use anyhow::{Result, anyhow};

use crate::subtitle::Segment;

/// Fallback reading rate for unrecognized language codes, in chars/sec
pub const FALLBACK_CHARS_PER_SECOND: f64 = 4.2;

/// Reading speed for a script language, in characters per second.
///
/// Defaults come from average reading speeds: Korean about 250 chars/min,
/// Japanese about 300 chars/min, English converted from words to characters.
#[derive(Debug, Clone)]
pub struct ReadingRateProfile {
    language: String,
    chars_per_second: f64,
}

impl ReadingRateProfile {
    /// Build a profile for a language, optionally overriding the table rate
    pub fn new(language: &str, chars_per_second: Option<f64>) -> Self {
        ReadingRateProfile {
            language: language.to_string(),
            chars_per_second: chars_per_second.unwrap_or_else(|| Self::table_rate(language)),
        }
    }

    /// Table rate for a two-letter language code
    pub fn table_rate(language: &str) -> f64 {
        match language {
            "ko" => 4.2,
            "ja" => 5.0,
            "en" => 12.0,
            _ => FALLBACK_CHARS_PER_SECOND,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn chars_per_second(&self) -> f64 {
        self.chars_per_second
    }
}

/// Clamp applied to every allocated segment duration, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationBounds {
    pub min_duration: f64,
    pub max_duration: f64,
}

impl DurationBounds {
    // @creates: Validated duration bounds
    // @validates: Both positive, min not above max
    pub fn new(min_duration: f64, max_duration: f64) -> Result<Self> {
        if min_duration <= 0.0 || max_duration <= 0.0 {
            return Err(anyhow!(
                "subtitle durations must be positive: min {}, max {}",
                min_duration,
                max_duration
            ));
        }
        if min_duration > max_duration {
            return Err(anyhow!(
                "minimum duration {} exceeds maximum duration {}",
                min_duration,
                max_duration
            ));
        }

        Ok(DurationBounds {
            min_duration,
            max_duration,
        })
    }

    /// Clamp a duration into the bounds
    pub fn clamp(&self, duration: f64) -> f64 {
        duration.max(self.min_duration).min(self.max_duration)
    }
}

impl Default for DurationBounds {
    fn default() -> Self {
        DurationBounds {
            min_duration: 1.5,
            max_duration: 6.0,
        }
    }
}

/// Proportional timestamp allocator
pub struct TimestampAllocator;

impl TimestampAllocator {
    /// Allocate contiguous start/end times for an ordered sentence list.
    ///
    /// Each sentence gets `char_count / effective_rate` seconds, clamped into
    /// `bounds`. Segments are gap-free: every start time equals the previous
    /// end time and the first starts at zero. When any raw duration falls
    /// outside the bounds, the clamped total diverges from a supplied
    /// `total_duration`; clamping takes precedence over exact matching.
    pub fn allocate(
        sentences: &[String],
        total_duration: Option<f64>,
        bounds: DurationBounds,
        chars_per_second: f64,
    ) -> Vec<Segment> {
        let total_chars: usize = sentences.iter().map(|s| s.chars().count()).sum();
        let effective_rate = Self::effective_rate(chars_per_second, total_duration, total_chars);

        let mut segments = Vec::with_capacity(sentences.len());
        let mut current_time = 0.0_f64;

        for (i, sentence) in sentences.iter().enumerate() {
            let char_count = sentence.chars().count();
            let estimated = char_count as f64 / effective_rate;
            let duration = bounds.clamp(estimated);

            segments.push(Segment::new(
                i + 1,
                current_time,
                current_time + duration,
                sentence.clone(),
            ));

            current_time += duration;
        }

        segments
    }

    /// Static table rate, or the rate rescaled so the raw estimate sums to
    /// the measured audio length. The two paths are kept explicit so each is
    /// independently testable.
    fn effective_rate(nominal: f64, total_duration: Option<f64>, total_chars: usize) -> f64 {
        match total_duration {
            Some(total) if total > 0.0 && total_chars > 0 => total_chars as f64 / total,
            _ => nominal,
        }
    }
}
