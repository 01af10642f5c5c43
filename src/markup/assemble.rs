// Allow dead code - assemblers are for library consumers
#![allow(dead_code)]

use crate::text_processing::TextPreprocessor;

use super::builder::SsmlBuilder;

// @module: Complete SSML documents from plain text

/// Pause lengths inserted by the auto-break assembler, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakTimings {
    /// Pause between paragraphs
    pub paragraph_ms: u32,
    /// Pause between sentences of the same paragraph
    pub sentence_ms: u32,
}

impl Default for BreakTimings {
    fn default() -> Self {
        BreakTimings {
            paragraph_ms: 800,
            sentence_ms: 300,
        }
    }
}

/// Prosody overrides for assembled documents; `None` keeps the "no change"
/// default so the prosody wrapper is omitted
#[derive(Debug, Clone, Default)]
pub struct ProsodyOptions {
    pub rate: Option<String>,
    pub pitch: Option<String>,
    pub volume: Option<String>,
}

impl ProsodyOptions {
    fn apply(&self, builder: &mut SsmlBuilder) {
        builder.set_prosody(
            self.rate.as_deref(),
            self.pitch.as_deref(),
            self.volume.as_deref(),
        );
    }
}

/// Build a document with automatic pauses.
///
/// Paragraphs come from blank-line boundaries and sentences from a
/// character scan that cuts after each terminator. A sentence pause is
/// inserted between sentences of the same paragraph and a paragraph pause
/// between paragraphs, never after the final one.
pub fn ssml_with_breaks(
    text: &str,
    voice_id: &str,
    timings: BreakTimings,
    prosody: &ProsodyOptions,
) -> String {
    let mut builder = SsmlBuilder::new(voice_id);
    prosody.apply(&mut builder);

    let paragraphs = TextPreprocessor::split_paragraphs(text);
    for (i, paragraph) in paragraphs.iter().enumerate() {
        let sentences = TextPreprocessor::split_sentences(paragraph);
        for (j, sentence) in sentences.iter().enumerate() {
            builder.add_text(sentence);
            if j + 1 < sentences.len() {
                builder.add_break(Some(timings.sentence_ms), None);
            }
        }

        if i + 1 < paragraphs.len() {
            builder.add_break(Some(timings.paragraph_ms), None);
        }
    }

    builder.build()
}

/// Build a document wrapping the whole text in a single speaking style
pub fn ssml_with_style(
    text: &str,
    voice_id: &str,
    style: &str,
    style_degree: f64,
    prosody: &ProsodyOptions,
) -> String {
    let mut builder = SsmlBuilder::new(voice_id);
    prosody.apply(&mut builder);
    builder.add_style(text, style, style_degree);
    builder.build()
}

/// Build a plain document with prosody only
pub fn simple_ssml(text: &str, voice_id: &str, prosody: &ProsodyOptions) -> String {
    let mut builder = SsmlBuilder::new(voice_id);
    prosody.apply(&mut builder);
    builder.add_text(text);
    builder.build()
}

/// Format a signed prosody offset, e.g. `(10, "%")` -> `"+10%"` and
/// `(-5, "Hz")` -> `"-5Hz"`
pub fn format_prosody_value(value: i64, unit: &str) -> String {
    if value >= 0 {
        format!("+{}{}", value, unit)
    } else {
        format!("{}{}", value, unit)
    }
}
