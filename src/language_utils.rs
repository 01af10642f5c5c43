use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating and normalizing ISO 639-1
/// (2-letter) and ISO 639-3 (3-letter) language codes. The reading-rate
/// table and output filenames work with the 2-letter form.
/// Look up a language from a 2- or 3-letter code
fn lookup(code: &str) -> Option<Language> {
    match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(code),
        _ => None,
    }
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible.
/// Three-letter codes with no 2-letter equivalent are returned unchanged.
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    let language = lookup(&normalized)
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

    Ok(language
        .to_639_1()
        .map(str::to_string)
        .unwrap_or(normalized))
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let normalized1 = match normalize_to_part1(code1) {
        Ok(n) => n,
        Err(_) => return false,
    };

    let normalized2 = match normalize_to_part1(code2) {
        Ok(n) => n,
        Err(_) => return false,
    };

    normalized1 == normalized2
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();
    let language = lookup(&normalized)
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

    Ok(language.to_name().to_string())
}

/// Language code of a voice identifier, e.g. "ko-KR-SunHiNeural" -> "ko"
pub fn voice_language_code(voice_id: &str) -> Option<String> {
    voice_id
        .split('-')
        .next()
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_lowercase)
}
