/*!
 * Timing records and the serialized timing document.
 *
 * Raw timestamps are supplied externally (by a human marking instants
 * against a playing audio clip) as seconds-since-start floats. These types
 * are the in-memory shape of that data plus the JSON document through which
 * it enters the CLI.
 */

use serde::{Deserialize, Serialize};

/// Capture granularity for a timing session
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// One start/end pair per lyric line
    #[default]
    Line,
    /// One start instant per word
    Word,
}

impl std::fmt::Display for TimingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line => write!(f, "line"),
            Self::Word => write!(f, "word"),
        }
    }
}

/// Timing for one lyric line.
///
/// `end` stays `None` while the line is being timed and is finalized by the
/// matching key release; `end > start` once finalized.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineTiming {
    /// Start instant in seconds
    pub start: f64,
    /// End instant in seconds, pending while the line is still open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// The line's text
    pub text: String,
}

impl LineTiming {
    /// Create a finalized line timing
    pub fn new(start: f64, end: f64, text: &str) -> Self {
        LineTiming {
            start,
            end: Some(end),
            text: text.to_string(),
        }
    }

    /// End instant, falling back to the start for a line never finalized
    pub fn end_or_start(&self) -> f64 {
        self.end.unwrap_or(self.start)
    }
}

/// Timing for one word, appended in strictly increasing chronological order.
/// End times are always derived, never stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordTiming {
    /// Index of the lyric line the word belongs to
    pub line_index: usize,
    /// Position of the word within its line
    pub word_index: usize,
    /// The word itself
    pub word: String,
    /// Start instant in seconds
    pub start_time: f64,
}

/// Lyrics parsed once per session start, immutable for its duration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedLyrics {
    /// Trimmed non-empty lines
    lines: Vec<String>,
    /// Per-line whitespace-split words
    words: Vec<Vec<String>>,
}

impl ParsedLyrics {
    /// Derive lyrics from raw text: trimmed non-empty lines, each also
    /// split into whitespace-separated words
    pub fn parse(text: &str) -> Self {
        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let words = lines
            .iter()
            .map(|line| {
                line.split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();

        ParsedLyrics { lines, words }
    }

    /// Number of lyric lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the text contained no usable lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line text by index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All line texts
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Words of one line
    pub fn words_in_line(&self, index: usize) -> Option<&[String]> {
        self.words.get(index).map(Vec::as_slice)
    }

    /// All per-line word sequences
    pub fn word_lines(&self) -> &[Vec<String>] {
        &self.words
    }

    /// Total word count across all lines
    pub fn total_words(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }
}

/// Serialized timing data, tagged by capture mode.
///
/// This is the boundary through which externally captured timestamps reach
/// the encoders: a line document carries finalized line timings, a word
/// document carries the word timings plus the lyric lines they index into.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TimingDocument {
    /// Line-granularity capture
    Line {
        /// Ordered line timings
        lines: Vec<LineTiming>,
    },
    /// Word-granularity capture
    Word {
        /// Lyric lines the word timings index into
        lyrics: Vec<String>,
        /// Ordered word timings
        words: Vec<WordTiming>,
    },
}

impl TimingDocument {
    /// Capture mode of the document
    pub fn mode(&self) -> TimingMode {
        match self {
            Self::Line { .. } => TimingMode::Line,
            Self::Word { .. } => TimingMode::Word,
        }
    }

    /// True when the document carries no timing records
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line { lines } => lines.is_empty(),
            Self::Word { words, .. } => words.is_empty(),
        }
    }
}
