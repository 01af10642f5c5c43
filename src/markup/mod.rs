/*!
 * Speech-markup (SSML) document construction.
 *
 * `builder` holds the chainable fragment accumulator; `assemble` builds
 * complete documents from plain text (automatic pause insertion, whole-text
 * styling, bare prosody-only documents).
 */

pub mod builder;
pub mod assemble;

pub use builder::{
    BreakSpec, BreakStrength, EmphasisLevel, MarkupFragment, PhoneticAlphabet, Prosody,
    SayAsInterpretation, SsmlBuilder, escape_xml,
};
pub use assemble::{
    BreakTimings, ProsodyOptions, format_prosody_value, simple_ssml, ssml_with_breaks,
    ssml_with_style,
};
