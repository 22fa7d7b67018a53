/*!
 * Tests for the SRT, WebVTT, ITT, and ASS encoders
 */

use lyrcap::color::RgbColor;
use lyrcap::encoders::{ass, itt, srt, webvtt};
use lyrcap::errors::ImportError;

use crate::common::{sample_line_timings, sample_word_lyrics, sample_word_timings};

fn highlight() -> RgbColor {
    RgbColor { r: 59, g: 130, b: 246 }
}

/// Test SRT line export with numbered blocks and comma timestamps
#[test]
fn test_encodeLines_withSampleTimings_shouldEmitNumberedBlocks() {
    let output = srt::encode_lines(&sample_line_timings());
    assert!(output.starts_with("1\n00:00:01,000 --> 00:00:03,500\nHello from the first line\n\n"));
    assert!(output.contains("2\n00:00:04,000 --> 00:00:06,000\nAnd here is the second\n\n"));
}

/// Test the line export closes sub-threshold gaps
#[test]
fn test_encodeLines_withSmallGap_shouldCloseIt() {
    use lyrcap::timing::models::LineTiming;
    let timings = vec![
        LineTiming::new(1.0, 3.9, "first"),
        LineTiming::new(4.0, 6.0, "second"),
    ];
    let output = srt::encode_lines(&timings);
    assert!(output.contains("00:00:01,000 --> 00:00:04,000"));
}

/// Test word-mode SRT collapses each line into one coarse cue
#[test]
fn test_encodeWords_withSampleTimings_shouldEmitOneCuePerLine() {
    let output = srt::encode_words(&sample_word_timings(), &sample_word_lyrics());
    // Line 0: first word at 1.0, last word at 2.0 plus the 2.0s tail
    assert!(output.contains("1\n00:00:01,000 --> 00:00:04,000\nHello world\n"));
    assert!(output.contains("2\n00:00:03,000 --> 00:00:06,000\nGoodbye moon\n"));
    // No per-word markup in this format
    assert!(!output.contains('<'));
}

/// Test empty inputs encode to empty documents
#[test]
fn test_encoders_withNoTimings_shouldReturnEmpty() {
    assert!(srt::encode_lines(&[]).is_empty());
    assert!(srt::encode_words(&[], &[]).is_empty());
    assert!(webvtt::encode(&[], &[], highlight()).is_empty());
    assert!(itt::encode(&[], &[], highlight()).is_empty());
    assert!(ass::encode(&[], &[], highlight()).is_empty());
}

/// Test SRT parsing recovers cue bounds and text
#[test]
fn test_parse_withValidSrt_shouldRecoverTimings() {
    let content = "1\n00:00:01,000 --> 00:00:03,500\nHello there\n\n2\n00:00:04,000 --> 00:00:06,000\nGoodbye\n";
    let timings = srt::parse(content).unwrap();
    assert_eq!(timings.len(), 2);
    assert!((timings[0].start - 1.0).abs() < 1e-9);
    assert_eq!(timings[0].end, Some(3.5));
    assert_eq!(timings[0].text, "Hello there");
}

/// Test multi-line cue text collapses to single spaces
#[test]
fn test_parse_withMultiLineCueText_shouldJoinWithSpaces() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nfirst half\nsecond half\n";
    let timings = srt::parse(content).unwrap();
    assert_eq!(timings[0].text, "first half second half");
}

/// Test content with no cue blocks is rejected
#[test]
fn test_parse_withNoCueBlocks_shouldFail() {
    assert_eq!(srt::parse("not a subtitle file"), Err(ImportError::NoEntries));
}

/// Test a malformed timestamp inside a block is rejected
#[test]
fn test_parse_withBadTimestamp_shouldFail() {
    let content = "1\n0:0:1,0 --> 00:00:02,000\ntext\n";
    assert!(matches!(
        srt::parse(content),
        Err(ImportError::InvalidTimestamp(_))
    ));
}

/// Test WebVTT header, style block, and highlight spans
#[test]
fn test_webvttEncode_withSampleTimings_shouldEmitStyleAndHighlights() {
    let output = webvtt::encode(&sample_word_timings(), &sample_word_lyrics(), highlight());
    assert!(output.starts_with("WEBVTT\n\n"));
    assert!(output.contains("::cue(.highlight)"));
    assert!(output.contains("background-color: #3b82f6;"));
    // First cue: the first word is highlighted, the rest of the line shown
    assert!(output.contains("1\n00:00:01.000 --> 00:00:02.000\n<c.highlight>Hello</c> world\n"));
    // Second cue highlights the second word
    assert!(output.contains("2\n00:00:02.000 --> 00:00:04.000\nHello <c.highlight>world</c>\n"));
}

/// Test ITT document structure, SMPTE timecodes, and bold spans
#[test]
fn test_ittEncode_withSampleTimings_shouldEmitSmpteAndSpans() {
    let output = itt::encode(&sample_word_timings(), &sample_word_lyrics(), highlight());
    assert!(output.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(output.contains(r#"ttp:frameRate="25""#));
    assert!(output.contains(r#"ttp:timeBase="smpte""#));
    assert!(output.contains(r#"<div begin="00:00:00:00">"#));
    // 1.99s end lands on frame 24
    assert!(output.contains(r#"<p begin="00:00:01:00" end="00:00:01:24">"#));
    assert!(output.contains(
        r#"<span tts:fontWeight="bold" tts:color="rgba(59,130,246,255)">Hello</span> world"#
    ));
    assert!(output.ends_with("</div></body></tt>"));
}

/// Test the last ITT cue holds 1.5 seconds after its word
#[test]
fn test_ittEncode_withLastWord_shouldHoldAfterIt() {
    let output = itt::encode(&sample_word_timings(), &sample_word_lyrics(), highlight());
    // Last word at 4.0s ends at 5.5s, frame 12 (floored from 12.5)
    assert!(output.contains(r#"end="00:00:05:12""#));
}

/// Test ASS styles carry the BGR-packed highlight color
#[test]
fn test_assEncode_withSampleTimings_shouldDeclareStylesAndOverrides() {
    let output = ass::encode(&sample_word_timings(), &sample_word_lyrics(), highlight());
    assert!(output.contains("[Script Info]"));
    assert!(output.contains("[V4+ Styles]"));
    assert!(output.contains("Style: Default,Arial,20,&Hffffff"));
    assert!(output.contains("Style: Highlight,Arial,20,&Hf6823b"));
    // Inline override switches color and bold on the active word only
    assert!(output.contains(r"{\c&Hf6823b&\b1}Hello{\c&Hffffff&\b0} world"));
    assert!(output.contains(r"Hello {\c&Hf6823b&\b1}world{\c&Hffffff&\b0}"));
}

/// Test ASS dialogue timestamps use centiseconds
#[test]
fn test_assEncode_withSampleTimings_shouldUseCentisecondClock() {
    let output = ass::encode(&sample_word_timings(), &sample_word_lyrics(), highlight());
    assert!(output.contains("Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,"));
    // Flat tail on the last word of each line
    assert!(output.contains("Dialogue: 0,0:00:02.00,0:00:04.00,Default,,0,0,0,,"));
}
