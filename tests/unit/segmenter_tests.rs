/*!
 * Tests for sentence segmentation functionality
 */

use scriptcue::segmenter::SentenceSegmenter;

/// Test the canonical hook-and-paragraphs script shape
#[test]
fn test_segment_withMarkersAndParagraphs_shouldReturnOrderedSentences() {
    let sentences =
        SentenceSegmenter::segment("[HOOK]\nHello world. This is great!\n\nSecond paragraph here.");
    assert_eq!(
        sentences,
        vec!["Hello world.", "This is great!", "Second paragraph here."]
    );
}

/// Test case-insensitive marker removal
#[test]
fn test_segment_withLowercaseMarkers_shouldRemoveMarkers() {
    let sentences = SentenceSegmenter::segment("[hook]\nText here.\n[Outro]\nBye now.");
    assert_eq!(sentences, vec!["Text here.", "Bye now."]);
}

/// Test Korean point markers
#[test]
fn test_segment_withKoreanPointMarkers_shouldRemoveMarkers() {
    let sentences = SentenceSegmenter::segment("[포인트 1]\n첫 번째 포인트입니다.\n[포인트 23]\n다음 포인트입니다.");
    assert_eq!(sentences, vec!["첫 번째 포인트입니다.", "다음 포인트입니다."]);
}

/// Test that markers inline with text are removed in place
#[test]
fn test_segment_withInlineMarker_shouldStripMarkerOnly() {
    let sentences = SentenceSegmenter::segment("[INTRO]Welcome back everyone.");
    assert_eq!(sentences, vec!["Welcome back everyone."]);
}

/// Test that clauses under two characters are dropped
#[test]
fn test_segment_withTinyClause_shouldDropIt() {
    let sentences = SentenceSegmenter::segment("Okay.! Next one.");
    assert_eq!(sentences, vec!["Okay.", "Next one."]);
}

/// Test that a two-character clause is kept
#[test]
fn test_segment_withTwoCharClause_shouldKeepIt() {
    let sentences = SentenceSegmenter::segment("No. Go.");
    assert_eq!(sentences, vec!["No.", "Go."]);
}

/// Test mixed terminators including CJK forms
#[test]
fn test_segment_withCjkTerminators_shouldSplitAfterEach() {
    let sentences = SentenceSegmenter::segment("오늘은 날씨가 좋습니다。정말 좋아요！산책 갈까요？");
    assert_eq!(
        sentences,
        vec!["오늘은 날씨가 좋습니다。", "정말 좋아요！", "산책 갈까요？"]
    );
}

/// Test that text order is preserved across paragraphs
#[test]
fn test_segment_withMultipleParagraphs_shouldPreserveOrder() {
    let sentences = SentenceSegmenter::segment("First. Second.\nThird.\n\nFourth. Fifth.");
    assert_eq!(
        sentences,
        vec!["First.", "Second.", "Third.", "Fourth.", "Fifth."]
    );
}

/// Test that a clause without a trailing terminator is kept
#[test]
fn test_segment_withUnterminatedClause_shouldKeepIt() {
    let sentences = SentenceSegmenter::segment("Complete sentence. trailing words");
    assert_eq!(sentences, vec!["Complete sentence.", "trailing words"]);
}

/// Test empty and marker-only scripts
#[test]
fn test_segment_withEmptyOrMarkerOnlyInput_shouldReturnNoSentences() {
    assert!(SentenceSegmenter::segment("").is_empty());
    assert!(SentenceSegmenter::segment("   \n \n").is_empty());
    assert!(SentenceSegmenter::segment("[HOOK]\n[MAIN]\n[OUTRO]").is_empty());
}
