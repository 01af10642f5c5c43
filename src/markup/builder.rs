// Allow dead code - builder operations are for library consumers
#![allow(dead_code)]

use std::fmt;

// @module: Chainable SSML fragment builder

/// Default pause length when a break is requested with no duration or strength
pub const DEFAULT_BREAK_MS: u32 = 500;

const NO_RATE_CHANGE: &str = "+0%";
const NO_PITCH_CHANGE: &str = "+0Hz";
const NO_VOLUME_CHANGE: &str = "+0%";

/// Relative pause strength for break elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakStrength {
    None,
    XWeak,
    Weak,
    Medium,
    Strong,
    XStrong,
}

impl BreakStrength {
    // @returns: Attribute value for the strength
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::XWeak => "x-weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::XStrong => "x-strong",
        }
    }
}

impl fmt::Display for BreakStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emphasis level for emphasized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisLevel {
    Reduced,
    None,
    #[default]
    Moderate,
    Strong,
}

impl EmphasisLevel {
    // @returns: Attribute value for the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reduced => "reduced",
            Self::None => "none",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for EmphasisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a say-as fragment should be read aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SayAsInterpretation {
    /// Read a number as a cardinal ("123" as one hundred twenty-three)
    Cardinal,
    /// Read a number as an ordinal ("1" as first)
    Ordinal,
    /// Read characters one by one
    Characters,
    /// Spell the text out
    SpellOut,
    /// Read as a date
    Date,
    /// Read as a time of day
    Time,
    /// Read as a telephone number
    Telephone,
    /// Read digits individually
    Digits,
    /// Read as a fraction
    Fraction,
}

impl SayAsInterpretation {
    // @returns: interpret-as attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
            Self::Characters => "characters",
            Self::SpellOut => "spell-out",
            Self::Date => "date",
            Self::Time => "time",
            Self::Telephone => "telephone",
            Self::Digits => "digits",
            Self::Fraction => "fraction",
        }
    }
}

/// Phonetic alphabet used by phoneme fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneticAlphabet {
    #[default]
    Ipa,
    Sapi,
    Ups,
}

impl PhoneticAlphabet {
    // @returns: alphabet attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipa => "ipa",
            Self::Sapi => "sapi",
            Self::Ups => "ups",
        }
    }
}

/// Whole-document voice adjustments.
///
/// Values are signed percentage or hertz offsets ("+10%", "-5Hz"). A field
/// left at its "+0" default is omitted from the rendered document.
#[derive(Debug, Clone, PartialEq)]
pub struct Prosody {
    pub rate: String,
    pub pitch: String,
    pub volume: String,
}

impl Prosody {
    /// Whether every field still carries its "no change" default
    pub fn is_neutral(&self) -> bool {
        self.rate == NO_RATE_CHANGE
            && self.pitch == NO_PITCH_CHANGE
            && self.volume == NO_VOLUME_CHANGE
    }
}

impl Default for Prosody {
    fn default() -> Self {
        Prosody {
            rate: NO_RATE_CHANGE.to_string(),
            pitch: NO_PITCH_CHANGE.to_string(),
            volume: NO_VOLUME_CHANGE.to_string(),
        }
    }
}

/// Pause specification carried by a break fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakSpec {
    /// Explicit pause length in milliseconds
    Duration(u32),
    /// Named relative strength
    Strength(BreakStrength),
}

/// One ordered piece of a markup document.
///
/// Text-bearing variants store text that has already been XML-escaped by
/// the builder; rendering concatenates fragments without further escaping.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupFragment {
    /// Escaped plain text
    Text(String),
    /// Pause
    Break(BreakSpec),
    /// Escaped text wrapped in an emphasis element
    Emphasis { level: EmphasisLevel, text: String },
    /// Escaped text read with a specific interpretation
    SayAs {
        interpret_as: SayAsInterpretation,
        format: Option<String>,
        text: String,
    },
    /// Escaped text with an explicit phonetic transcription
    Phoneme {
        alphabet: PhoneticAlphabet,
        ph: String,
        text: String,
    },
    /// Escaped text spoken as its escaped alias
    Substitution { alias: String, text: String },
    /// Escaped text in a vendor speaking style
    Style {
        name: String,
        degree: f64,
        text: String,
    },
    /// Escaped text wrapped as a paragraph
    Paragraph(String),
    /// Escaped text wrapped as a sentence
    Sentence(String),
}

impl MarkupFragment {
    /// Append this fragment's markup to the output buffer
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Break(BreakSpec::Duration(ms)) => {
                out.push_str(&format!("<break time=\"{}ms\"/>", ms));
            }
            Self::Break(BreakSpec::Strength(strength)) => {
                out.push_str(&format!("<break strength=\"{}\"/>", strength.as_str()));
            }
            Self::Emphasis { level, text } => {
                out.push_str(&format!(
                    "<emphasis level=\"{}\">{}</emphasis>",
                    level.as_str(),
                    text
                ));
            }
            Self::SayAs {
                interpret_as,
                format,
                text,
            } => match format {
                Some(format) => out.push_str(&format!(
                    "<say-as interpret-as=\"{}\" format=\"{}\">{}</say-as>",
                    interpret_as.as_str(),
                    format,
                    text
                )),
                None => out.push_str(&format!(
                    "<say-as interpret-as=\"{}\">{}</say-as>",
                    interpret_as.as_str(),
                    text
                )),
            },
            Self::Phoneme { alphabet, ph, text } => {
                out.push_str(&format!(
                    "<phoneme alphabet=\"{}\" ph=\"{}\">{}</phoneme>",
                    alphabet.as_str(),
                    ph,
                    text
                ));
            }
            Self::Substitution { alias, text } => {
                out.push_str(&format!("<sub alias=\"{}\">{}</sub>", alias, text));
            }
            Self::Style { name, degree, text } => {
                if *degree != 1.0 {
                    out.push_str(&format!(
                        "<mstts:express-as style=\"{}\" styledegree=\"{}\">{}</mstts:express-as>",
                        name, degree, text
                    ));
                } else {
                    out.push_str(&format!(
                        "<mstts:express-as style=\"{}\">{}</mstts:express-as>",
                        name, text
                    ));
                }
            }
            Self::Paragraph(text) => {
                out.push_str(&format!("<p>{}</p>", text));
            }
            Self::Sentence(text) => {
                out.push_str(&format!("<s>{}</s>", text));
            }
        }
    }
}

/// Escape the five XML-reserved characters, exactly once.
///
/// The ampersand pass runs first so entities produced by the later passes
/// are not escaped again.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Chainable SSML document builder bound to a single synthesis voice.
///
/// Every `add_*` call appends one fragment to an ordered internal list and
/// returns the builder for chaining. `build` renders the accumulated
/// fragments into a complete document without mutating the builder;
/// `reset` clears the fragment list (prosody settings survive) so the
/// instance can be reused.
#[derive(Debug, Clone)]
pub struct SsmlBuilder {
    voice_id: String,
    lang: String,
    fragments: Vec<MarkupFragment>,
    prosody: Prosody,
}

impl SsmlBuilder {
    /// Create a builder for a voice identifier like `ko-KR-SunHiNeural`
    pub fn new(voice_id: &str) -> Self {
        SsmlBuilder {
            voice_id: voice_id.to_string(),
            lang: Self::detect_language(voice_id),
            fragments: Vec::new(),
            prosody: Prosody::default(),
        }
    }

    /// Derive the document language tag from a voice identifier.
    ///
    /// Korean and Japanese voices map to their fixed locale tags; any other
    /// identifier with at least two dash-separated components keeps its
    /// first two; everything else falls back to en-US.
    fn detect_language(voice_id: &str) -> String {
        if voice_id.starts_with("ko-") {
            return "ko-KR".to_string();
        }
        if voice_id.starts_with("ja-") {
            return "ja-JP".to_string();
        }

        let mut parts = voice_id.split('-');
        if let (Some(language), Some(region)) = (parts.next(), parts.next()) {
            if !language.is_empty() && !region.is_empty() {
                return format!("{}-{}", language, region);
            }
        }

        "en-US".to_string()
    }

    /// Voice identifier the document is bound to
    pub fn voice(&self) -> &str {
        &self.voice_id
    }

    /// Language tag derived from the voice identifier
    pub fn language(&self) -> &str {
        &self.lang
    }

    /// Number of accumulated fragments
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Update prosody settings; omitted arguments keep their current value
    pub fn set_prosody(
        &mut self,
        rate: Option<&str>,
        pitch: Option<&str>,
        volume: Option<&str>,
    ) -> &mut Self {
        if let Some(rate) = rate {
            self.prosody.rate = rate.to_string();
        }
        if let Some(pitch) = pitch {
            self.prosody.pitch = pitch.to_string();
        }
        if let Some(volume) = volume {
            self.prosody.volume = volume.to_string();
        }
        self
    }

    /// Append escaped plain text
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.fragments.push(MarkupFragment::Text(escape_xml(text)));
        self
    }

    /// Append a pause.
    ///
    /// An explicit duration takes precedence over a strength; with neither,
    /// a 500 ms pause is used.
    pub fn add_break(&mut self, duration_ms: Option<u32>, strength: Option<BreakStrength>) -> &mut Self {
        let spec = match (duration_ms, strength) {
            (Some(ms), _) => BreakSpec::Duration(ms),
            (None, Some(strength)) => BreakSpec::Strength(strength),
            (None, None) => BreakSpec::Duration(DEFAULT_BREAK_MS),
        };
        self.fragments.push(MarkupFragment::Break(spec));
        self
    }

    /// Append emphasized text
    pub fn add_emphasis(&mut self, text: &str, level: EmphasisLevel) -> &mut Self {
        self.fragments.push(MarkupFragment::Emphasis {
            level,
            text: escape_xml(text),
        });
        self
    }

    /// Append text read with a specific interpretation, e.g. a date or
    /// telephone number, with an optional format qualifier
    pub fn add_say_as(
        &mut self,
        text: &str,
        interpret_as: SayAsInterpretation,
        format: Option<&str>,
    ) -> &mut Self {
        self.fragments.push(MarkupFragment::SayAs {
            interpret_as,
            format: format.map(escape_xml),
            text: escape_xml(text),
        });
        self
    }

    /// Append text with an explicit phonetic transcription
    pub fn add_phoneme(&mut self, text: &str, ph: &str, alphabet: PhoneticAlphabet) -> &mut Self {
        self.fragments.push(MarkupFragment::Phoneme {
            alphabet,
            ph: ph.to_string(),
            text: escape_xml(text),
        });
        self
    }

    /// Append text spoken as its alias, e.g. an expanded abbreviation
    pub fn add_sub(&mut self, text: &str, alias: &str) -> &mut Self {
        self.fragments.push(MarkupFragment::Substitution {
            alias: escape_xml(alias),
            text: escape_xml(text),
        });
        self
    }

    /// Append text in a vendor speaking style; the degree attribute is
    /// emitted only when it differs from 1.0
    pub fn add_style(&mut self, text: &str, style: &str, degree: f64) -> &mut Self {
        self.fragments.push(MarkupFragment::Style {
            name: style.to_string(),
            degree,
            text: escape_xml(text),
        });
        self
    }

    /// Append text wrapped as a paragraph
    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        self.fragments.push(MarkupFragment::Paragraph(escape_xml(text)));
        self
    }

    /// Append text wrapped as a sentence
    pub fn add_sentence(&mut self, text: &str) -> &mut Self {
        self.fragments.push(MarkupFragment::Sentence(escape_xml(text)));
        self
    }

    /// Render the accumulated fragments into a complete SSML document.
    ///
    /// Fragments are concatenated in insertion order, wrapped in a prosody
    /// element when any setting differs from its default (only non-default
    /// attributes are emitted), then in the voice element, then in the
    /// speak root carrying the derived language tag.
    pub fn build(&self) -> String {
        let mut content = String::new();
        for fragment in &self.fragments {
            fragment.render_into(&mut content);
        }

        let mut prosody_attrs = Vec::new();
        if self.prosody.rate != NO_RATE_CHANGE {
            prosody_attrs.push(format!("rate=\"{}\"", self.prosody.rate));
        }
        if self.prosody.pitch != NO_PITCH_CHANGE {
            prosody_attrs.push(format!("pitch=\"{}\"", self.prosody.pitch));
        }
        if self.prosody.volume != NO_VOLUME_CHANGE {
            prosody_attrs.push(format!("volume=\"{}\"", self.prosody.volume));
        }

        if !prosody_attrs.is_empty() {
            content = format!("<prosody {}>{}</prosody>", prosody_attrs.join(" "), content);
        }

        format!(
            "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\"\n    \
             xmlns:mstts=\"https://www.w3.org/2001/mstts\"\n    \
             xml:lang=\"{}\">\n    \
             <voice name=\"{}\">\n        \
             {}\n    \
             </voice>\n</speak>",
            self.lang, self.voice_id, content
        )
    }

    /// Clear the fragment list, keeping prosody settings, for reuse
    pub fn reset(&mut self) -> &mut Self {
        self.fragments.clear();
        self
    }
}
