/*!
 * The timing-session finite-state machine.
 *
 * All stateful, order-sensitive logic lives here behind a narrow transition
 * interface (`begin`, `mark_line_start`/`mark_line_end`, `mark_word`,
 * `reset`). The cursor advances monotonically and never rewinds except on
 * explicit reset; encoders only ever see snapshots, never live state.
 */

use log::debug;

use crate::errors::SessionError;
use crate::timing::models::{
    LineTiming, ParsedLyrics, TimingDocument, TimingMode, WordTiming,
};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No capture in progress
    #[default]
    Idle,
    /// Capture in progress, cursor advancing
    Active,
    /// Capture ran to the end of the lyrics
    Finished,
}

/// Events the session emits to attached observers.
///
/// Display concerns (highlighting, scrolling, notifications) live entirely
/// behind this seam; the core never depends on them.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A session began in the given mode
    Started(TimingMode),
    /// A line's start instant was recorded
    LineStarted {
        /// Line index
        index: usize,
        /// Instant in seconds
        at: f64,
    },
    /// A line's end instant was recorded and the cursor advanced
    LineFinished {
        /// Line index
        index: usize,
        /// Instant in seconds
        at: f64,
    },
    /// A word's start instant was recorded and the cursor advanced
    WordMarked {
        /// Line index
        line: usize,
        /// Word index within the line
        word: usize,
        /// Instant in seconds
        at: f64,
    },
    /// The cursor reached the end of the lyrics
    Finished,
    /// The session was reset to idle
    Reset,
}

/// Observer interface for display layers
pub trait SessionObserver {
    /// Called for every session event, in the order they occur
    fn on_event(&mut self, event: &SessionEvent);
}

/// A lyric timing session.
///
/// Single writer of the only shared mutable resource in the core: the
/// cursor plus the timing arrays. Exports read a snapshot.
pub struct TimingSession {
    mode: TimingMode,
    lyrics_text: String,
    audio_loaded: bool,
    parsed: ParsedLyrics,
    line_timings: Vec<LineTiming>,
    word_timings: Vec<WordTiming>,
    current_line: usize,
    current_word: usize,
    state: SessionState,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl TimingSession {
    /// Create an idle session in the given mode
    pub fn new(mode: TimingMode) -> Self {
        TimingSession {
            mode,
            lyrics_text: String::new(),
            audio_loaded: false,
            parsed: ParsedLyrics::default(),
            line_timings: Vec::new(),
            word_timings: Vec::new(),
            current_line: 0,
            current_word: 0,
            state: SessionState::Idle,
            observers: Vec::new(),
        }
    }

    /// Set the lyric text the session will time against
    pub fn set_lyrics(&mut self, text: &str) {
        self.lyrics_text = text.to_string();
    }

    /// Mark an audio source as loaded (the clip itself stays external)
    pub fn load_audio(&mut self) {
        self.audio_loaded = true;
    }

    /// Attach an observer
    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Start capturing.
    ///
    /// Requires non-empty lyrics and a loaded audio source; fails without
    /// any state change otherwise. Resets the cursor, clears both timing
    /// arrays, re-derives the parsed lyrics, and enters `Active`.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.lyrics_text.trim().is_empty() {
            return Err(SessionError::EmptyLyrics);
        }
        if !self.audio_loaded {
            return Err(SessionError::MissingAudio);
        }

        let parsed = ParsedLyrics::parse(&self.lyrics_text);
        if parsed.is_empty() {
            return Err(SessionError::EmptyLyrics);
        }

        self.parsed = parsed;
        self.current_line = 0;
        self.current_word = 0;
        self.line_timings.clear();
        self.word_timings.clear();
        self.state = SessionState::Active;

        debug!("Timing session started in {} mode ({} lines)", self.mode, self.parsed.len());
        self.emit(SessionEvent::Started(self.mode));
        Ok(())
    }

    /// Record the current line's start instant (line mode key press).
    /// A repeated press before the matching release re-marks the start.
    pub fn mark_line_start(&mut self, at: f64) {
        if self.mode != TimingMode::Line || self.state != SessionState::Active {
            return;
        }
        if self.current_line >= self.parsed.len() {
            return;
        }

        let text = self
            .parsed
            .line(self.current_line)
            .unwrap_or_default()
            .to_string();
        let timing = LineTiming {
            start: at,
            end: None,
            text,
        };

        if self.current_line < self.line_timings.len() {
            self.line_timings[self.current_line] = timing;
        } else {
            self.line_timings.push(timing);
        }

        self.emit(SessionEvent::LineStarted { index: self.current_line, at });
    }

    /// Record the current line's end instant and advance (line mode key
    /// release). A release with no recorded start is a no-op: the cursor is
    /// only within `line_timings` after the matching press.
    pub fn mark_line_end(&mut self, at: f64) {
        if self.mode != TimingMode::Line || self.state != SessionState::Active {
            return;
        }
        if self.current_line >= self.line_timings.len() {
            return;
        }

        self.line_timings[self.current_line].end = Some(at);
        let finished_index = self.current_line;
        self.current_line += 1;
        self.emit(SessionEvent::LineFinished { index: finished_index, at });

        if self.current_line >= self.parsed.len() {
            self.finish();
        }
    }

    /// Record the current word's start instant and advance the word cursor,
    /// rolling over to the next line when a line's words are exhausted
    pub fn mark_word(&mut self, at: f64) {
        if self.mode != TimingMode::Word || self.state != SessionState::Active {
            return;
        }
        if self.current_line >= self.parsed.len() {
            return;
        }

        let Some(line_words) = self.parsed.words_in_line(self.current_line) else {
            return;
        };
        if self.current_word >= line_words.len() {
            return;
        }

        let timing = WordTiming {
            line_index: self.current_line,
            word_index: self.current_word,
            word: line_words[self.current_word].clone(),
            start_time: at,
        };
        let marked = (self.current_line, self.current_word);
        self.word_timings.push(timing);

        self.current_word += 1;
        if self.current_word >= line_words.len() {
            self.current_line += 1;
            self.current_word = 0;
        }

        self.emit(SessionEvent::WordMarked { line: marked.0, word: marked.1, at });

        if self.current_line >= self.parsed.len() {
            self.finish();
        }
    }

    /// Clear all timings and return to idle, keeping lyrics and mode
    pub fn reset(&mut self) {
        self.current_line = 0;
        self.current_word = 0;
        self.line_timings.clear();
        self.word_timings.clear();
        self.state = SessionState::Idle;
        self.emit(SessionEvent::Reset);
    }

    /// Switch capture mode.
    ///
    /// While a session is active the switch discards its timings and must
    /// be explicitly confirmed; unconfirmed switches fail without any state
    /// change.
    pub fn switch_mode(&mut self, mode: TimingMode, confirmed: bool) -> Result<(), SessionError> {
        if self.state == SessionState::Active {
            if !confirmed {
                return Err(SessionError::ActiveSession);
            }
            self.reset();
        }
        self.mode = mode;
        Ok(())
    }

    /// Seed a line-mode session from pre-existing line timings (SRT import).
    /// Lyrics become the cue texts; the session ends up idle with data ready
    /// to export.
    pub fn seed_from_lines(&mut self, timings: Vec<LineTiming>) {
        self.mode = TimingMode::Line;
        self.lyrics_text = timings
            .iter()
            .map(|t| t.text.clone())
            .collect::<Vec<_>>()
            .join("\n");
        self.parsed = ParsedLyrics::parse(&self.lyrics_text);
        self.line_timings = timings;
        self.word_timings.clear();
        self.current_line = 0;
        self.current_word = 0;
        self.state = SessionState::Idle;
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Capture mode
    pub fn mode(&self) -> TimingMode {
        self.mode
    }

    /// Cursor position as (line, word)
    pub fn cursor(&self) -> (usize, usize) {
        (self.current_line, self.current_word)
    }

    /// Parsed lyrics of the current session
    pub fn parsed_lyrics(&self) -> &ParsedLyrics {
        &self.parsed
    }

    /// Recorded line timings
    pub fn line_timings(&self) -> &[LineTiming] {
        &self.line_timings
    }

    /// Recorded word timings
    pub fn word_timings(&self) -> &[WordTiming] {
        &self.word_timings
    }

    /// Words marked so far
    pub fn completed_words(&self) -> usize {
        self.word_timings.len()
    }

    /// Total words in the parsed lyrics
    pub fn total_words(&self) -> usize {
        self.parsed.total_words()
    }

    /// Completion percentage for word-mode progress display
    pub fn progress_percent(&self) -> f64 {
        let total = self.total_words();
        if total == 0 {
            return 0.0;
        }
        (self.completed_words() as f64 / total as f64) * 100.0
    }

    /// Snapshot the recorded timings as a serializable document.
    /// Exports consume this copy; they never touch live session state.
    pub fn snapshot(&self) -> TimingDocument {
        match self.mode {
            TimingMode::Line => TimingDocument::Line {
                lines: self.line_timings.clone(),
            },
            TimingMode::Word => TimingDocument::Word {
                lyrics: self.parsed.lines().to_vec(),
                words: self.word_timings.clone(),
            },
        }
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        debug!(
            "Timing session finished: {} line timings, {} word timings",
            self.line_timings.len(),
            self.word_timings.len()
        );
        self.emit(SessionEvent::Finished);
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl std::fmt::Debug for TimingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimingSession")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("cursor", &(self.current_line, self.current_word))
            .field("line_timings", &self.line_timings.len())
            .field("word_timings", &self.word_timings.len())
            .finish()
    }
}
