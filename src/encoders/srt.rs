/*!
 * SRT (SubRip) encoding and parsing.
 *
 * Two exports share the grammar: the line export writes one gap-closed cue
 * per lyric line, and the coarse word export writes one cue per line whose
 * window is driven by the line's first and last word instants. The parser
 * is the inverse of the same grammar and is used to seed a session from an
 * existing caption file.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::{self, EndTimePolicy};
use crate::errors::ImportError;
use crate::timecode;
use crate::timing::models::{LineTiming, WordTiming};

// @const: SRT cue block: index, timecode pair, text up to the next block
static SRT_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\d+\s+([\d:,]+)\s+-->\s+([\d:,]+)\s+(.*?)(?:\n\s*\n|\z)").unwrap()
});

/// Encode line timings as numbered SRT cue blocks
pub fn encode_lines(timings: &[LineTiming]) -> String {
    let cues = cue::line_cues(timings);
    let mut srt = String::new();

    for (index, cue) in cues.iter().enumerate() {
        srt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            timecode::format_srt(cue.start),
            timecode::format_srt(cue.end),
            cue.text
        ));
    }

    srt
}

/// Encode word timings as one SRT cue per line (first word's start through
/// last word's start plus the flat tail; the whole line is shown)
pub fn encode_words(words: &[WordTiming], lyrics: &[Vec<String>]) -> String {
    if words.is_empty() {
        return String::new();
    }

    let cues = cue::word_cues(words, lyrics, EndTimePolicy::LinePlusTwo);
    let mut srt = String::new();

    for (index, cue) in cues.iter().enumerate() {
        srt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            timecode::format_srt(cue.start),
            timecode::format_srt(cue.end),
            cue.text
        ));
    }

    srt
}

/// Parse SRT content into line timings.
///
/// Multi-line cue text collapses to single spaces, matching how imported
/// cues seed the lyric lines. Zero matches means the file is invalid.
pub fn parse(content: &str) -> Result<Vec<LineTiming>, ImportError> {
    let mut timings = Vec::new();

    for caps in SRT_BLOCK_REGEX.captures_iter(content) {
        let start = parse_timestamp(&caps[1])?;
        let end = parse_timestamp(&caps[2])?;
        let text = caps[3]
            .trim()
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");

        timings.push(LineTiming {
            start,
            end: Some(end),
            text,
        });
    }

    if timings.is_empty() {
        return Err(ImportError::NoEntries);
    }

    Ok(timings)
}

fn parse_timestamp(timestamp: &str) -> Result<f64, ImportError> {
    timecode::parse_srt(timestamp)
        .map_err(|_| ImportError::InvalidTimestamp(timestamp.to_string()))
}
