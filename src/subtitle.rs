use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context, anyhow};
use log::warn;

// @module: Subtitle segments and SRT rendering

// @struct: Single timestamped subtitle segment
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    // @field: Sequence number, 1-based
    pub index: usize,

    // @field: Start time in seconds
    pub start_time: f64,

    // @field: End time in seconds
    pub end_time: f64,

    // @field: Sentence text
    pub text: String,
}

impl Segment {
    /// Creates a new segment without validation
    pub fn new(index: usize, start_time: f64, end_time: f64, text: String) -> Self {
        Segment {
            index,
            start_time,
            end_time,
            text,
        }
    }

    // @creates: Validated segment
    // @validates: Time range and non-empty text
    #[allow(dead_code)]
    pub fn new_validated(index: usize, start_time: f64, end_time: f64, text: String) -> Result<Self> {
        if end_time <= start_time {
            return Err(anyhow!(
                "Invalid time range: end time {} <= start time {}",
                end_time, start_time
            ));
        }

        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(anyhow!("Empty subtitle text for segment {}", index));
        }

        Ok(Segment {
            index,
            start_time,
            end_time,
            text: trimmed_text.to_string(),
        })
    }

    /// Allocated display duration in seconds - used by tests and external consumers
    #[allow(dead_code)]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Parse an SRT timestamp to seconds - used by tests
    #[allow(dead_code)]
    pub fn parse_timestamp(timestamp: &str) -> Result<f64> {
        // Parse HH:MM:SS,mmm format
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        // Validate time components
        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok((hours * 3600 + minutes * 60 + seconds) as f64 + millis as f64 / 1000.0)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time)
    }

    /// Format seconds as an SRT timestamp (HH:MM:SS,mmm).
    ///
    /// The millisecond component is truncated (floor of the fractional
    /// second times 1000), never rounded. Formatting then parsing back is
    /// lossy by strictly less than one millisecond.
    pub fn format_timestamp(seconds: f64) -> String {
        let total = seconds.max(0.0);
        let hours = (total / 3600.0) as u64;
        let minutes = ((total % 3600.0) / 60.0) as u64;
        let secs = (total % 60.0) as u64;
        let millis = (total.fract() * 1000.0).floor() as u64;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Collection of subtitle segments with metadata
#[derive(Debug)]
pub struct SubtitleTrack {
    /// Source script filename
    pub source_file: PathBuf,

    /// List of subtitle segments
    pub segments: Vec<Segment>,

    /// Script language
    pub language: String,
}

impl SubtitleTrack {
    /// Create a new empty subtitle track - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(source_file: PathBuf, language: String) -> Self {
        SubtitleTrack {
            source_file,
            segments: Vec::new(),
            language,
        }
    }

    /// Create a track from allocated segments
    pub fn from_segments(source_file: PathBuf, language: String, segments: Vec<Segment>) -> Self {
        SubtitleTrack {
            source_file,
            segments,
            language,
        }
    }

    /// End time of the last segment, or zero for an empty track
    pub fn total_duration(&self) -> f64 {
        self.segments.last().map(|s| s.end_time).unwrap_or(0.0)
    }

    /// Render the whole track in SRT format
    pub fn to_srt_string(&self) -> String {
        let mut content = String::new();
        for segment in &self.segments {
            content.push_str(&segment.to_string());
        }
        content
    }

    /// Write the track to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if self.segments.is_empty() {
            warn!("Writing subtitle track with no segments: {}", path.display());
        }

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to file
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for segment in &self.segments {
            write!(file, "{}", segment)
                .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;
        }

        Ok(())
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Track")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Language: {}", self.language)?;
        writeln!(f, "Segments: {}", self.segments.len())?;
        Ok(())
    }
}
