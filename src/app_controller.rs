use anyhow::Result;
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::errors::ScriptError;
use crate::file_utils::{FileManager, FileType};
use crate::language_utils;
use crate::markup;
use crate::media_probe;
use crate::segmenter::SentenceSegmenter;
use crate::subtitle::SubtitleTrack;
use crate::text_processing::TextPreprocessor;
use crate::timing::{ReadingRateProfile, TimestampAllocator};

// @module: Application controller for script processing

/// Result summary of one subtitle generation run
#[derive(Debug, Clone)]
pub struct SrtReport {
    /// Path of the written subtitle file
    pub srt_path: PathBuf,
    /// Number of generated segments
    pub segment_count: usize,
    /// End time of the last segment in seconds
    pub total_duration: f64,
}

/// Main application controller for script-to-subtitle and script-to-markup runs
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        // A mismatched voice still synthesizes, just with the wrong accent
        if let Some(voice_lang) = language_utils::voice_language_code(&config.voice) {
            if !language_utils::language_codes_match(&voice_lang, &config.language) {
                warn!(
                    "Voice '{}' does not match script language '{}'",
                    config.voice, config.language
                );
            }
        }

        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.language.is_empty() && !self.config.voice.is_empty()
    }

    /// Generate subtitles for a script file or for every script in a directory
    pub async fn run_srt(
        &self,
        input_path: PathBuf,
        audio_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        if input_path.is_dir() {
            return self.run_srt_folder(&input_path, force_overwrite).await;
        }

        if !input_path.is_file() {
            return Err(ScriptError::MissingScriptSource {
                path: input_path.display().to_string(),
            }
            .into());
        }

        self.check_script_type(&input_path)?;

        let output_dir = match output_dir {
            Some(dir) => dir,
            None => input_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        };

        let output_path =
            FileManager::generate_output_path(&input_path, &output_dir, &self.config.language, "srt");
        if output_path.exists() && !force_overwrite {
            warn!("Skipping script, subtitle already exists (use -f to force overwrite)");
            return Ok(());
        }

        let report = self
            .generate_srt(&input_path, audio_path.as_deref(), &output_path)
            .await?;

        info!(
            "Success: {} ({} segments, {:.1}s)",
            report.srt_path.display(),
            report.segment_count,
            report.total_duration
        );

        Ok(())
    }

    /// Generate a speech-markup document for a script file
    pub async fn run_ssml(
        &self,
        input_path: PathBuf,
        output_dir: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        if !input_path.is_file() {
            return Err(ScriptError::MissingScriptSource {
                path: input_path.display().to_string(),
            }
            .into());
        }

        self.check_script_type(&input_path)?;

        let output_dir = match output_dir {
            Some(dir) => dir,
            None => input_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        };

        let output_path = FileManager::generate_output_path(
            &input_path,
            &output_dir,
            &self.config.language,
            "ssml.xml",
        );
        if output_path.exists() && !force_overwrite {
            warn!("Skipping script, markup already exists (use -f to force overwrite)");
            return Ok(());
        }

        let raw = FileManager::read_to_string(&input_path)?;
        let document = self.build_ssml_document(&raw)?;
        FileManager::write_to_file(&output_path, &document)?;

        info!("Success: {}", output_path.display());

        Ok(())
    }

    /// Run the subtitle pipeline for one script and write the SRT file
    pub async fn generate_srt(
        &self,
        script_path: &Path,
        audio_path: Option<&Path>,
        output_path: &Path,
    ) -> Result<SrtReport> {
        if !script_path.exists() {
            return Err(ScriptError::MissingScriptSource {
                path: script_path.display().to_string(),
            }
            .into());
        }

        let raw = FileManager::read_to_string(script_path)?;

        let sentences = SentenceSegmenter::segment(&raw);
        if sentences.is_empty() {
            return Err(ScriptError::EmptyInput.into());
        }
        debug!("Segmented {} sentences from {}", sentences.len(), script_path.display());

        // Optional measured duration; any probe failure falls back to the
        // static per-language rate
        let total_duration = match audio_path {
            Some(audio) => match media_probe::probe_duration(audio).await {
                Ok(duration) => Some(duration),
                Err(e) => {
                    warn!("Audio duration unavailable, using static reading rate: {}", e);
                    None
                }
            },
            None => None,
        };

        let profile =
            ReadingRateProfile::new(&self.config.language, self.config.timing.chars_per_second);
        let bounds = self.config.timing.bounds()?;
        let segments =
            TimestampAllocator::allocate(&sentences, total_duration, bounds, profile.chars_per_second());

        let track = SubtitleTrack::from_segments(
            script_path.to_path_buf(),
            self.config.language.clone(),
            segments,
        );
        track.write_to_srt(output_path)?;

        Ok(SrtReport {
            srt_path: output_path.to_path_buf(),
            segment_count: track.segments.len(),
            total_duration: track.total_duration(),
        })
    }

    /// Build the speech-markup document for raw script text.
    ///
    /// Section markers are stripped, then paragraphs are preprocessed one by
    /// one so blank-line boundaries survive whitespace collapsing. A
    /// configured speaking style wraps the whole text; otherwise pauses are
    /// inserted automatically.
    pub fn build_ssml_document(&self, raw_text: &str) -> Result<String> {
        let stripped = SentenceSegmenter::strip_markers(raw_text);
        let paragraphs: Vec<String> = TextPreprocessor::split_paragraphs(&stripped)
            .iter()
            .map(|p| TextPreprocessor::preprocess(p))
            .filter(|p| !p.is_empty())
            .collect();

        if paragraphs.is_empty() {
            return Err(ScriptError::EmptyInput.into());
        }

        let text = paragraphs.join("\n\n");
        let prosody = self.config.markup.prosody_options();

        let document = match &self.config.markup.style {
            Some(style) => markup::ssml_with_style(
                &text,
                &self.config.voice,
                style,
                self.config.markup.style_degree,
                &prosody,
            ),
            None => markup::ssml_with_breaks(
                &text,
                &self.config.voice,
                self.config.markup.break_timings(),
                &prosody,
            ),
        };

        Ok(document)
    }

    /// Run the subtitle pipeline for every script file in a directory
    async fn run_srt_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all script files in the directory (recursive)
        let mut script_files = Vec::new();
        for ext in &["txt", "md", "markdown"] {
            let mut files = FileManager::find_files(input_dir, ext)?;
            script_files.append(&mut files);
        }
        script_files.sort();

        if script_files.is_empty() {
            return Err(anyhow::anyhow!("No script files found in directory: {:?}", input_dir));
        }

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(script_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing scripts");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;

        for script_file in script_files.iter() {
            let file_name = script_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            folder_pb.set_message(format!("Processing: {}", file_name));

            let output_dir = match script_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.to_path_buf(),
            };

            // Check if a subtitle already exists
            let output_path = FileManager::generate_output_path(
                script_file,
                &output_dir,
                &self.config.language,
                "srt",
            );
            if output_path.exists() && !force_overwrite {
                warn!("Skipping script, subtitle already exists (use -f to force overwrite)");
                skip_count += 1;
                folder_pb.inc(1);
                continue;
            }

            match self.generate_srt(script_file, None, &output_path).await {
                Ok(report) => {
                    debug!(
                        "Generated {} segments for {}",
                        report.segment_count, file_name
                    );
                    success_count += 1;
                }
                Err(e) => {
                    error!("Error processing script {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        let duration = start_time.elapsed();
        info!(
            "Folder processing completed in {}: {} processed, {} skipped, {} errors",
            Self::format_duration(duration),
            success_count,
            skip_count,
            error_count
        );

        Ok(())
    }

    /// Reject inputs that are clearly not script text
    fn check_script_type(&self, input_path: &Path) -> Result<()> {
        match FileManager::detect_file_type(input_path)? {
            FileType::Script => Ok(()),
            FileType::Audio => Err(anyhow::anyhow!(
                "Input is an audio file, expected a script: {:?} (pass audio with -a)",
                input_path
            )),
            FileType::Subtitle => Err(anyhow::anyhow!(
                "Input is already a subtitle file: {:?}",
                input_path
            )),
            FileType::Unknown => {
                warn!("Unrecognized script extension, treating as plain text: {:?}", input_path);
                Ok(())
            }
        }
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
