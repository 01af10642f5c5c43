/*!
 * Tests for the chainable SSML builder
 */

use scriptcue::markup::{
    escape_xml, BreakStrength, EmphasisLevel, PhoneticAlphabet, Prosody, SayAsInterpretation,
    SsmlBuilder,
};

/// Test the prosody "no change" defaults
#[test]
fn test_prosody_default_shouldBeNeutral() {
    let prosody = Prosody::default();
    assert_eq!(prosody.rate, "+0%");
    assert_eq!(prosody.pitch, "+0Hz");
    assert_eq!(prosody.volume, "+0%");
    assert!(prosody.is_neutral());

    let adjusted = Prosody {
        rate: "+10%".to_string(),
        ..Prosody::default()
    };
    assert!(!adjusted.is_neutral());
}

/// Test escaping of all five reserved characters
#[test]
fn test_escape_xml_withAllReservedChars_shouldEscapeEachOnce() {
    assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
}

/// Test that the ampersand pass does not double-escape produced entities
#[test]
fn test_escape_xml_withMixedText_shouldNotDoubleEscape() {
    let escaped = escape_xml("A & B < C");
    assert_eq!(escaped, "A &amp; B &lt; C");
    assert!(!escaped.contains("&amp;amp;"));
    assert!(!escaped.contains("&amp;lt;"));
}

/// Test the document skeleton for an empty builder, including after reset
#[test]
fn test_build_withNoFragments_shouldEmitMinimalDocument() {
    let mut builder = SsmlBuilder::new("ko-KR-SunHiNeural");
    builder.reset();
    let document = builder.build();

    assert!(document.starts_with("<speak version=\"1.0\""));
    assert!(document.contains("xmlns=\"http://www.w3.org/2001/10/synthesis\""));
    assert!(document.contains("xmlns:mstts=\"https://www.w3.org/2001/mstts\""));
    assert!(document.contains("xml:lang=\"ko-KR\""));
    assert!(document.contains("<voice name=\"ko-KR-SunHiNeural\">"));
    assert!(document.ends_with("</speak>"));
    assert!(!document.contains("<prosody"));
}

/// Test language derivation from voice identifiers
#[test]
fn test_new_withVariousVoices_shouldDeriveLanguageTag() {
    assert_eq!(SsmlBuilder::new("ko-KR-SunHiNeural").language(), "ko-KR");
    assert_eq!(SsmlBuilder::new("ja-JP-NanamiNeural").language(), "ja-JP");
    assert_eq!(SsmlBuilder::new("en-GB-SoniaNeural").language(), "en-GB");
    assert_eq!(SsmlBuilder::new("zh-CN-XiaoxiaoNeural").language(), "zh-CN");
    assert_eq!(SsmlBuilder::new("fr-FR-DeniseNeural").language(), "fr-FR");
    assert_eq!(SsmlBuilder::new("robot").language(), "en-US");
    assert_eq!(SsmlBuilder::new("").language(), "en-US");
}

/// Test plain text escaping inside the document
#[test]
fn test_add_text_withReservedChars_shouldEscapeInOutput() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_text("A & B < C");
    let document = builder.build();

    assert!(document.contains("A &amp; B &lt; C"));
    assert!(!document.contains("A & B"));
    assert!(!document.contains("&amp;amp;"));
}

/// Test break precedence: duration wins, then strength, then the default
#[test]
fn test_add_break_withDurationAndStrength_shouldPreferDuration() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_break(Some(250), Some(BreakStrength::Strong));
    assert!(builder.build().contains("<break time=\"250ms\"/>"));

    builder.reset().add_break(None, Some(BreakStrength::Strong));
    assert!(builder.build().contains("<break strength=\"strong\"/>"));

    builder.reset().add_break(None, None);
    assert!(builder.build().contains("<break time=\"500ms\"/>"));
}

/// Test emphasis wrapping and levels
#[test]
fn test_add_emphasis_withLevels_shouldTagText() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_emphasis("important", EmphasisLevel::Strong);
    assert!(builder
        .build()
        .contains("<emphasis level=\"strong\">important</emphasis>"));

    builder.reset().add_emphasis("usual", EmphasisLevel::default());
    assert!(builder
        .build()
        .contains("<emphasis level=\"moderate\">usual</emphasis>"));
}

/// Test say-as with and without a format qualifier
#[test]
fn test_add_say_as_withAndWithoutFormat_shouldEmitAttributes() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_say_as("2026-08-08", SayAsInterpretation::Date, Some("ymd"));
    assert!(builder
        .build()
        .contains("<say-as interpret-as=\"date\" format=\"ymd\">2026-08-08</say-as>"));

    builder.reset().add_say_as("123", SayAsInterpretation::Cardinal, None);
    assert!(builder
        .build()
        .contains("<say-as interpret-as=\"cardinal\">123</say-as>"));
}

/// Test phoneme fragments
#[test]
fn test_add_phoneme_withIpa_shouldEmitTranscription() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_phoneme("tomato", "təˈmeɪtoʊ", PhoneticAlphabet::default());
    assert!(builder
        .build()
        .contains("<phoneme alphabet=\"ipa\" ph=\"təˈmeɪtoʊ\">tomato</phoneme>"));
}

/// Test substitution fragments escape both text and alias
#[test]
fn test_add_sub_withReservedCharsInAlias_shouldEscapeAlias() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_sub("W3C", "World <Wide> Web");
    assert!(builder
        .build()
        .contains("<sub alias=\"World &lt;Wide&gt; Web\">W3C</sub>"));
}

/// Test style fragments omit the degree attribute at 1.0
#[test]
fn test_add_style_withDefaultDegree_shouldOmitDegreeAttribute() {
    let mut builder = SsmlBuilder::new("ko-KR-SunHiNeural");
    builder.add_style("신나는 소식입니다", "cheerful", 1.0);
    let document = builder.build();
    assert!(document.contains("<mstts:express-as style=\"cheerful\">신나는 소식입니다</mstts:express-as>"));
    assert!(!document.contains("styledegree"));
}

/// Test style fragments emit a non-default degree
#[test]
fn test_add_style_withCustomDegree_shouldEmitDegreeAttribute() {
    let mut builder = SsmlBuilder::new("ko-KR-SunHiNeural");
    builder.add_style("hello", "excited", 1.5);
    assert!(builder
        .build()
        .contains("<mstts:express-as style=\"excited\" styledegree=\"1.5\">hello</mstts:express-as>"));
}

/// Test paragraph and sentence structural fragments
#[test]
fn test_add_paragraph_and_sentence_shouldWrapText() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_paragraph("A paragraph.").add_sentence("A sentence.");
    let document = builder.build();
    assert!(document.contains("<p>A paragraph.</p>"));
    assert!(document.contains("<s>A sentence.</s>"));
}

/// Test fragment ordering is insertion order
#[test]
fn test_build_withChainedCalls_shouldPreserveOrder() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder
        .add_text("first")
        .add_break(Some(200), None)
        .add_emphasis("second", EmphasisLevel::Moderate)
        .add_text("third");
    let document = builder.build();

    let first = document.find("first").unwrap();
    let pause = document.find("<break time=\"200ms\"/>").unwrap();
    let second = document.find("second").unwrap();
    let third = document.find("third").unwrap();
    assert!(first < pause && pause < second && second < third);
    assert_eq!(builder.fragment_count(), 4);
}

/// Test prosody wrapper is emitted only with non-default settings
#[test]
fn test_build_withProsodyOverrides_shouldWrapOnlyNonDefaults() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.set_prosody(Some("+10%"), None, None).add_text("hello");
    let document = builder.build();

    assert!(document.contains("<prosody rate=\"+10%\">hello</prosody>"));
    assert!(!document.contains("pitch="));
    assert!(!document.contains("volume="));
}

/// Test all three prosody attributes together
#[test]
fn test_build_withFullProsody_shouldEmitAllAttributes() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder
        .set_prosody(Some("-20%"), Some("+5Hz"), Some("+10%"))
        .add_text("hello");
    let document = builder.build();
    assert!(document.contains("<prosody rate=\"-20%\" pitch=\"+5Hz\" volume=\"+10%\">hello</prosody>"));
}

/// Test that explicitly neutral prosody values keep the wrapper omitted
#[test]
fn test_build_withNeutralProsody_shouldOmitWrapper() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder
        .set_prosody(Some("+0%"), Some("+0Hz"), Some("+0%"))
        .add_text("hello");
    assert!(!builder.build().contains("<prosody"));
}

/// Test reset clears fragments but keeps prosody settings
#[test]
fn test_reset_withProsodySet_shouldKeepProsodyAndClearFragments() {
    let mut builder = SsmlBuilder::new("ko-KR-SunHiNeural");
    builder.set_prosody(Some("+10%"), None, None).add_text("hello");
    builder.reset();

    assert_eq!(builder.fragment_count(), 0);
    let document = builder.build();
    assert!(!document.contains("hello"));
    // Prosody survives a reset
    assert!(document.contains("<prosody rate=\"+10%\">"));
    assert!(document.contains("<voice name=\"ko-KR-SunHiNeural\">"));
}

/// Test that build does not mutate the builder
#[test]
fn test_build_calledTwice_shouldReturnIdenticalDocuments() {
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder.add_text("stable").add_break(None, None);
    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);
    assert_eq!(builder.fragment_count(), 2);
}

/// Test well-formedness with hostile text through every text-bearing call
#[test]
fn test_build_withReservedCharsEverywhere_shouldStayBalanced() {
    let nasty = "x<y&z>\"w'";
    let mut builder = SsmlBuilder::new("en-US-JennyNeural");
    builder
        .add_text(nasty)
        .add_emphasis(nasty, EmphasisLevel::Strong)
        .add_say_as(nasty, SayAsInterpretation::Characters, Some(nasty))
        .add_phoneme(nasty, "ph", PhoneticAlphabet::Ipa)
        .add_sub(nasty, nasty)
        .add_style(nasty, "calm", 2.0)
        .add_paragraph(nasty)
        .add_sentence(nasty);
    let document = builder.build();

    // No raw reserved characters survive from the input
    assert!(!document.contains(nasty));
    assert!(document.contains("x&lt;y&amp;z&gt;&quot;w&apos;"));
    // Every opening angle bracket is markup, so the document stays balanced
    assert_eq!(
        document.matches('<').count(),
        document.matches('>').count()
    );
}
