/*!
 * # scriptcue - script-to-subtitle and speech-markup preparation
 *
 * A Rust library for preparing spoken-word scripts for synthesis and
 * subtitling.
 *
 * ## Features
 *
 * - Estimate subtitle timestamps from script text using a per-language
 *   reading-speed model
 * - Rescale timing against a measured audio duration when one is available
 * - Render timestamped segments as SRT subtitle files
 * - Build SSML documents (breaks, emphasis, pronunciation, substitution,
 *   style, prosody) for external synthesis services
 * - Automatic pause insertion between sentences and paragraphs
 * - ISO 639-1 and ISO 639-3 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text_processing`: Script normalization and splitting helpers
 * - `segmenter`: Paragraph-aware sentence segmentation
 * - `timing`: Reading-rate model and timestamp allocation
 * - `subtitle`: Subtitle segments and SRT rendering
 * - `markup`: SSML document construction:
 *   - `markup::builder`: Chainable fragment builder
 *   - `markup::assemble`: Complete documents from plain text
 * - `media_probe`: Optional ffprobe-backed audio duration lookup
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod markup;
pub mod media_probe;
pub mod segmenter;
pub mod subtitle;
pub mod text_processing;
pub mod timing;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, SrtReport};
pub use errors::{AppError, ProbeError, ScriptError};
pub use markup::{SsmlBuilder, ssml_with_breaks, ssml_with_style};
pub use segmenter::SentenceSegmenter;
pub use subtitle::{Segment, SubtitleTrack};
pub use text_processing::TextPreprocessor;
pub use timing::{DurationBounds, ReadingRateProfile, TimestampAllocator};
