/*!
 * Sentence segmentation for subtitle generation.
 *
 * Splits a raw script into the ordered sentence list the timestamp
 * allocator works on: section markers are removed, paragraphs are taken
 * from line breaks, and sentences are cut after terminator punctuation.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text_processing::TextPreprocessor;

/// Bracketed section markers used by script templates, e.g. `[HOOK]` or `[포인트 2]`
static SECTION_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[(HOOK|INTRO|MAIN|CTA|OUTRO|포인트\s*\d+)\]")
        .expect("Invalid section marker regex")
});

/// Minimum sentence length in characters; shorter clauses are noise
const MIN_SENTENCE_CHARS: usize = 2;

/// Paragraph-aware sentence splitter
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Split raw script text into ordered sentences.
    ///
    /// Section markers are stripped first, then each non-blank line is split
    /// after sentence terminators with the terminator kept attached. Clauses
    /// shorter than two characters are dropped. An empty result means the
    /// script had no usable sentences; the caller reports that as
    /// [`crate::errors::ScriptError::EmptyInput`].
    pub fn segment(raw_text: &str) -> Vec<String> {
        let stripped = Self::strip_markers(raw_text);

        let mut sentences = Vec::new();
        for paragraph in stripped.split('\n') {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }

            for clause in TextPreprocessor::split_sentences(paragraph) {
                if clause.chars().count() >= MIN_SENTENCE_CHARS {
                    sentences.push(clause);
                }
            }
        }

        sentences
    }

    /// Remove bracketed section markers, leaving the spoken text untouched
    pub fn strip_markers(text: &str) -> String {
        SECTION_MARKER_REGEX.replace_all(text, "").into_owned()
    }
}
