/*!
 * Optional audio-duration probe.
 *
 * Asks an external ffprobe for the container duration of a rendered audio
 * file so the timestamp allocator can rescale its reading rate. The probe
 * is strictly optional: callers treat every failure as a warning and fall
 * back to the static rate table.
 */

use std::path::Path;
use std::time::Duration;

use log::debug;
use serde_json::Value;
use tokio::process::Command;

use crate::errors::ProbeError;

// ffprobe answers in well under a second for local files
const PROBE_TIMEOUT_SECS: u64 = 30;

/// Measure the duration of an audio file in seconds via ffprobe
pub async fn probe_duration<P: AsRef<Path>>(audio_path: P) -> Result<f64, ProbeError> {
    let audio_path = audio_path.as_ref();

    if !audio_path.exists() {
        return Err(ProbeError::NotFound {
            path: audio_path.display().to_string(),
        });
    }

    // Add timeout to prevent hanging on problematic files
    let ffprobe_future = Command::new("ffprobe")
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_entries", "format=duration",
            audio_path.to_str().unwrap_or(""),
        ])
        .output();

    let output = tokio::select! {
        result = ffprobe_future => {
            result.map_err(|e| ProbeError::Failed(format!("failed to execute ffprobe: {}", e)))?
        },
        _ = tokio::time::sleep(Duration::from_secs(PROBE_TIMEOUT_SECS)) => {
            return Err(ProbeError::Timeout(PROBE_TIMEOUT_SECS));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProbeError::Failed(stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout)
        .map_err(|e| ProbeError::BadOutput(format!("invalid ffprobe JSON: {}", e)))?;

    let duration_str = json
        .get("format")
        .and_then(|f| f.get("duration"))
        .and_then(|d| d.as_str())
        .ok_or_else(|| ProbeError::BadOutput("missing format.duration field".to_string()))?;

    let duration = duration_str
        .trim()
        .parse::<f64>()
        .map_err(|e| ProbeError::BadOutput(format!("unparsable duration '{}': {}", duration_str, e)))?;

    debug!("Measured audio duration: {:.3}s ({})", duration, audio_path.display());

    Ok(duration)
}
