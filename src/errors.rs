/*!
 * Error types for the scriptcue application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while turning script text into sentences
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The script produced no usable sentences (empty or marker-only text)
    #[error("no sentences found in script text")]
    EmptyInput,

    /// The script source file could not be located
    #[error("script source not found: {path}")]
    MissingScriptSource {
        /// Path that was looked up
        path: String,
    },
}

/// Errors raised by the optional audio duration probe
///
/// These are never fatal for subtitle generation: the controller logs them
/// as warnings and falls back to the static reading-rate table.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The audio file does not exist
    #[error("audio file not found: {path}")]
    NotFound {
        /// Path that was looked up
        path: String,
    },

    /// ffprobe could not be executed or exited with an error
    #[error("ffprobe failed: {0}")]
    Failed(String),

    /// ffprobe did not finish within the allotted time
    #[error("ffprobe timed out after {0} seconds")]
    Timeout(u64),

    /// ffprobe ran but its output carried no usable duration
    #[error("could not read a duration from ffprobe output: {0}")]
    BadOutput(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from script segmentation
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Error from the audio duration probe
    #[error("Audio probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
