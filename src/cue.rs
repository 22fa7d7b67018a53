/*!
 * Cue derivation: raw timings to non-overlapping caption cues.
 *
 * Line mode closes sub-threshold silent gaps between adjacent captions.
 * Word mode derives the end times that are never stored, per a small closed
 * set of policy variants: the formats genuinely disagree on the formula
 * (epsilon-before-next versus a flat two-second tail) and the divergence is
 * preserved per format rather than unified.
 */

use crate::timing::models::{LineTiming, WordTiming};

/// Gaps shorter than this are closed by extending the earlier cue
pub const MIN_GAP: f64 = 0.25;

/// Margin subtracted before the next cue's start to avoid zero-width cues
pub const EPSILON: f64 = 0.01;

/// Trailing hold for the very last word under the epsilon-aware policy
pub const LAST_WORD_HOLD: f64 = 1.5;

/// Flat tail added after a line's last word under the flat policies
pub const FLAT_TAIL: f64 = 2.0;

/// A format-agnostic caption cue, recomputed freshly for every export
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Start instant in seconds
    pub start: f64,
    /// End instant in seconds
    pub end: f64,
    /// Full caption text (the whole lyric line)
    pub text: String,
    /// Index of the currently spoken word within the text, when the format
    /// highlights it
    pub highlight_word: Option<usize>,
}

/// End-time inference variants for word-granularity cues.
///
/// Which variant a format uses is a source property, not a bug; encoders
/// select their own and the table in the format documentation is normative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTimePolicy {
    /// One cue per word: next word's start minus epsilon, looking across the
    /// line boundary to the next line's first word, with a 1.5s hold for the
    /// very last word (ITT)
    EpsilonNextAware,
    /// One cue per word: next word's start within the line, flat +2.0s for
    /// the last word of each line (WebVTT, ASS)
    FlatPlusTwo,
    /// One cue per line: first word's start through last word's start +2.0s
    /// (word-mode SRT)
    LinePlusTwo,
}

/// Close sub-threshold gaps between adjacent line timings.
///
/// Runs once, left to right, over a copy. Gaps of `MIN_GAP` or more are
/// left untouched.
pub fn close_line_gaps(timings: &[LineTiming]) -> Vec<LineTiming> {
    let mut closed = timings.to_vec();
    for i in 0..closed.len().saturating_sub(1) {
        let next_start = closed[i + 1].start;
        let gap = next_start - closed[i].end_or_start();
        if gap < MIN_GAP {
            closed[i].end = Some(next_start);
        }
    }
    closed
}

/// Derive gap-closed cues from line timings
pub fn line_cues(timings: &[LineTiming]) -> Vec<Cue> {
    close_line_gaps(timings)
        .into_iter()
        .map(|timing| Cue {
            start: timing.start,
            end: timing.end_or_start(),
            text: timing.text,
            highlight_word: None,
        })
        .collect()
}

/// Derive cues from line timings without gap closing (the editor-XML export
/// places titles at the raw instants)
pub fn raw_line_cues(timings: &[LineTiming]) -> Vec<Cue> {
    timings
        .iter()
        .map(|timing| Cue {
            start: timing.start,
            end: timing.end_or_start(),
            text: timing.text.clone(),
            highlight_word: None,
        })
        .collect()
}

/// Group word timings by line index, preserving first-appearance order of
/// the line indices rather than sorting them numerically
pub fn group_words_by_line(words: &[WordTiming]) -> Vec<(usize, Vec<&WordTiming>)> {
    let mut groups: Vec<(usize, Vec<&WordTiming>)> = Vec::new();
    for timing in words {
        match groups.iter_mut().find(|(index, _)| *index == timing.line_index) {
            Some((_, group)) => group.push(timing),
            None => groups.push((timing.line_index, vec![timing])),
        }
    }
    groups
}

/// Derive word-granularity cues under the given end-time policy.
///
/// `lyrics` holds the parsed lines the word timings index into; each cue's
/// text is the full line so the viewer always sees complete context, with
/// `highlight_word` naming the currently spoken word. The session state
/// machine guarantees line indices are in range.
pub fn word_cues(words: &[WordTiming], lyrics: &[Vec<String>], policy: EndTimePolicy) -> Vec<Cue> {
    let groups = group_words_by_line(words);
    let mut cues = Vec::new();

    for (position, (line_index, group)) in groups.iter().enumerate() {
        let line_text = lyrics[*line_index].join(" ");

        if policy == EndTimePolicy::LinePlusTwo {
            // Coarse per-line cue driven by the word instants
            let start = group[0].start_time;
            let end = group[group.len() - 1].start_time + FLAT_TAIL;
            cues.push(Cue {
                start,
                end,
                text: line_text,
                highlight_word: None,
            });
            continue;
        }

        let next_line_start = groups
            .get(position + 1)
            .and_then(|(_, next_group)| next_group.first())
            .map(|timing| timing.start_time);

        for (word_pos, timing) in group.iter().enumerate() {
            let start = timing.start_time;
            let end = match policy {
                EndTimePolicy::EpsilonNextAware => {
                    if word_pos < group.len() - 1 {
                        group[word_pos + 1].start_time - EPSILON
                    } else if let Some(next_start) = next_line_start {
                        next_start - EPSILON
                    } else {
                        start + LAST_WORD_HOLD
                    }
                }
                EndTimePolicy::FlatPlusTwo => {
                    if word_pos < group.len() - 1 {
                        group[word_pos + 1].start_time
                    } else {
                        start + FLAT_TAIL
                    }
                }
                EndTimePolicy::LinePlusTwo => unreachable!("handled per line above"),
            };

            cues.push(Cue {
                start,
                end,
                text: line_text.clone(),
                highlight_word: Some(word_pos),
            });
        }
    }

    cues
}
