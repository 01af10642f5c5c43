/*!
 * Script text preprocessing for synthesis and segmentation.
 *
 * Normalizes raw script text (whitespace, stray punctuation, URLs, emoji)
 * and provides the sentence/paragraph splitting helpers shared by the
 * segmentation and markup-assembly stages.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that end a spoken sentence, including CJK full-width forms
pub const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Default speaking pace for the word-based duration estimate
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

// Hangul syllables are spoken at roughly 375 per minute
const HANGUL_SYLLABLES_PER_MINUTE: f64 = 375.0;

static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

static PERIOD_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.{2,3}").expect("Invalid period run regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+").expect("Invalid URL regex")
});

/// Emoticons, pictographs, transport symbols and regional indicator flags
static EMOJI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}]")
        .expect("Invalid emoji regex")
});

static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Invalid blank line regex")
});

static HANGUL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[가-힣]").expect("Invalid Hangul regex")
});

// @module: Text preprocessing for TTS and subtitle pipelines

/// Pure text normalization and splitting helpers
pub struct TextPreprocessor;

impl TextPreprocessor {
    /// Normalize raw script text before synthesis or segmentation.
    ///
    /// Applied in order: collapse whitespace runs to a single space, reduce
    /// runs of 2-3 periods to one, strip URLs, strip emoji, trim. Remaining
    /// visible characters keep their original order.
    pub fn preprocess(text: &str) -> String {
        let text = WHITESPACE_RUN_REGEX.replace_all(text, " ");
        let text = PERIOD_RUN_REGEX.replace_all(&text, ".");
        let text = URL_REGEX.replace_all(&text, "");
        let text = EMOJI_REGEX.replace_all(&text, "");
        text.trim().to_string()
    }

    /// Whether a character terminates a sentence
    pub fn is_sentence_terminator(c: char) -> bool {
        SENTENCE_TERMINATORS.contains(&c)
    }

    /// Split text into sentences, cutting immediately after each terminator.
    ///
    /// The terminator stays attached to the preceding clause. Consecutive
    /// terminators produce separate clauses; empty clauses are dropped after
    /// trimming. A character scan is used because the regex crate has no
    /// lookbehind support.
    pub fn split_sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();

        for c in text.chars() {
            current.push(c);
            if Self::is_sentence_terminator(c) {
                let clause = current.trim();
                if !clause.is_empty() {
                    sentences.push(clause.to_string());
                }
                current.clear();
            }
        }

        // Trailing clause without a terminator
        let tail = current.trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }

    /// Split text into paragraphs on blank lines
    pub fn split_paragraphs(text: &str) -> Vec<String> {
        BLANK_LINE_REGEX
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Coarse spoken-duration estimate in seconds.
    ///
    /// Korean text is estimated from its Hangul syllable count; everything
    /// else from its whitespace-delimited word count. The subtitle allocator
    /// uses the finer character-rate model instead; this helper serves
    /// callers that only need a single number.
    #[allow(dead_code)]
    pub fn estimate_duration(text: &str, words_per_minute: u32) -> f64 {
        let syllables = HANGUL_REGEX.find_iter(text).count();
        if syllables > 0 {
            (syllables as f64 / HANGUL_SYLLABLES_PER_MINUTE) * 60.0
        } else {
            let words = text.split_whitespace().count();
            (words as f64 / f64::from(words_per_minute)) * 60.0
        }
    }
}
