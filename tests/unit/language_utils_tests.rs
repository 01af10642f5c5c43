/*!
 * Tests for language utility functions
 */

use scriptcue::language_utils::{
    get_language_name, language_codes_match, normalize_to_part1, voice_language_code,
};

/// Test normalization of language codes to ISO 639-1 format
#[test]
fn test_normalize_to_part1_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part1("en").unwrap(), "en");
    assert_eq!(normalize_to_part1("ko").unwrap(), "ko");
    assert_eq!(normalize_to_part1("eng").unwrap(), "en");
    assert_eq!(normalize_to_part1("kor").unwrap(), "ko");
    assert_eq!(normalize_to_part1("jpn").unwrap(), "ja");

    // Case insensitivity and whitespace
    assert_eq!(normalize_to_part1("EN").unwrap(), "en");
    assert_eq!(normalize_to_part1(" ko ").unwrap(), "ko");
}

/// Test that invalid codes are rejected
#[test]
fn test_normalize_to_part1_withInvalidCodes_shouldReject() {
    assert!(normalize_to_part1("xx").is_err());
    assert!(normalize_to_part1("123").is_err());
    assert!(normalize_to_part1("e").is_err());
    assert!(normalize_to_part1("korean").is_err());
    assert!(normalize_to_part1("").is_err());
}

/// Test matching of different language code formats
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldReturnTrue() {
    assert!(language_codes_match("ko", "kor"));
    assert!(language_codes_match("kor", "ko"));
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("ja", "ja"));
}

/// Test non-matching and invalid codes
#[test]
fn test_language_codes_match_withDifferentOrInvalidCodes_shouldReturnFalse() {
    assert!(!language_codes_match("en", "fr"));
    assert!(!language_codes_match("ko", "ja"));
    assert!(!language_codes_match("en", "xx"));
    assert!(!language_codes_match("xx", "xx"));
}

/// Test language name lookup
#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishNames() {
    assert_eq!(get_language_name("ko").unwrap(), "Korean");
    assert_eq!(get_language_name("ja").unwrap(), "Japanese");
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert!(get_language_name("zz").is_err());
}

/// Test extracting the language prefix from a voice identifier
#[test]
fn test_voice_language_code_withVoiceIds_shouldReturnPrefix() {
    assert_eq!(
        voice_language_code("ko-KR-SunHiNeural"),
        Some("ko".to_string())
    );
    assert_eq!(
        voice_language_code("EN-US-JennyNeural"),
        Some("en".to_string())
    );
    assert_eq!(voice_language_code("solo"), Some("solo".to_string()));
    assert_eq!(voice_language_code(""), None);
}
