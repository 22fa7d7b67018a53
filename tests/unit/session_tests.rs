/*!
 * Tests for the timing-session state machine
 */

use std::cell::RefCell;
use std::rc::Rc;

use lyrcap::errors::SessionError;
use lyrcap::timing::models::{LineTiming, TimingDocument, TimingMode};
use lyrcap::timing::session::{SessionEvent, SessionObserver, SessionState, TimingSession};

/// Observer that records every event into a shared log
struct RecordingObserver {
    log: Rc<RefCell<Vec<SessionEvent>>>,
}

impl SessionObserver for RecordingObserver {
    fn on_event(&mut self, event: &SessionEvent) {
        self.log.borrow_mut().push(event.clone());
    }
}

fn line_session(lyrics: &str) -> TimingSession {
    let mut session = TimingSession::new(TimingMode::Line);
    session.set_lyrics(lyrics);
    session.load_audio();
    session
}

fn word_session(lyrics: &str) -> TimingSession {
    let mut session = TimingSession::new(TimingMode::Word);
    session.set_lyrics(lyrics);
    session.load_audio();
    session
}

/// Test begin demands lyrics
#[test]
fn test_begin_withEmptyLyrics_shouldFailWithoutStateChange() {
    let mut session = TimingSession::new(TimingMode::Line);
    session.load_audio();
    session.set_lyrics("   \n  ");
    assert_eq!(session.begin(), Err(SessionError::EmptyLyrics));
    assert_eq!(session.state(), SessionState::Idle);
}

/// Test begin demands a loaded audio source
#[test]
fn test_begin_withoutAudio_shouldFailWithoutStateChange() {
    let mut session = TimingSession::new(TimingMode::Line);
    session.set_lyrics("some lyrics");
    assert_eq!(session.begin(), Err(SessionError::MissingAudio));
    assert_eq!(session.state(), SessionState::Idle);
}

/// Test a satisfied begin activates the session and parses the lyrics
#[test]
fn test_begin_withLyricsAndAudio_shouldActivate() {
    let mut session = line_session("one line\ntwo line");
    session.begin().unwrap();
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.parsed_lyrics().len(), 2);
    assert_eq!(session.cursor(), (0, 0));
}

/// Test line press/release records bounds and advances
#[test]
fn test_markLine_withPressAndRelease_shouldRecordAndAdvance() {
    let mut session = line_session("first\nsecond");
    session.begin().unwrap();

    session.mark_line_start(1.0);
    assert_eq!(session.cursor(), (0, 0));
    session.mark_line_end(2.5);
    assert_eq!(session.cursor(), (1, 0));

    let timings = session.line_timings();
    assert_eq!(timings.len(), 1);
    assert_eq!(timings[0].text, "first");
    assert!((timings[0].start - 1.0).abs() < 1e-9);
    assert_eq!(timings[0].end, Some(2.5));
}

/// Test a repeated press before the release re-marks the start
#[test]
fn test_markLineStart_withRepeatedPress_shouldReplaceStart() {
    let mut session = line_session("first\nsecond");
    session.begin().unwrap();

    session.mark_line_start(1.0);
    session.mark_line_start(1.4);
    session.mark_line_end(2.0);

    assert!((session.line_timings()[0].start - 1.4).abs() < 1e-9);
}

/// Test a release with no recorded start is ignored
#[test]
fn test_markLineEnd_withoutStart_shouldBeNoOp() {
    let mut session = line_session("first\nsecond");
    session.begin().unwrap();

    session.mark_line_end(2.0);
    assert!(session.line_timings().is_empty());
    assert_eq!(session.cursor(), (0, 0));
}

/// Test finishing the last line ends the session
#[test]
fn test_markLine_withAllLinesTimed_shouldFinish() {
    let mut session = line_session("only line");
    session.begin().unwrap();

    session.mark_line_start(1.0);
    session.mark_line_end(2.0);
    assert_eq!(session.state(), SessionState::Finished);
}

/// Test word marking advances through a line and rolls over
#[test]
fn test_markWord_withLineExhausted_shouldRollOverToNextLine() {
    let mut session = word_session("two words\nmore");
    session.begin().unwrap();

    session.mark_word(1.0);
    assert_eq!(session.cursor(), (0, 1));
    session.mark_word(2.0);
    assert_eq!(session.cursor(), (1, 0));

    let timings = session.word_timings();
    assert_eq!(timings.len(), 2);
    assert_eq!(timings[0].word, "two");
    assert_eq!(timings[1].word, "words");
    assert_eq!(timings[1].line_index, 0);
    assert_eq!(timings[1].word_index, 1);
}

/// Test marking the last word finishes the session
#[test]
fn test_markWord_withAllWordsMarked_shouldFinish() {
    let mut session = word_session("one two");
    session.begin().unwrap();

    session.mark_word(1.0);
    session.mark_word(2.0);
    assert_eq!(session.state(), SessionState::Finished);
    // Further marks are ignored after finishing
    session.mark_word(3.0);
    assert_eq!(session.word_timings().len(), 2);
}

/// Test mode-mismatched marks are ignored
#[test]
fn test_markWord_inLineMode_shouldBeNoOp() {
    let mut session = line_session("some words here");
    session.begin().unwrap();
    session.mark_word(1.0);
    assert!(session.word_timings().is_empty());
}

/// Test reset clears timings but keeps lyrics and mode
#[test]
fn test_reset_withActiveSession_shouldReturnToIdle() {
    let mut session = word_session("one two");
    session.begin().unwrap();
    session.mark_word(1.0);

    session.reset();
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.cursor(), (0, 0));
    assert!(session.word_timings().is_empty());
    assert_eq!(session.mode(), TimingMode::Word);

    // The kept lyrics allow an immediate restart
    session.begin().unwrap();
    assert_eq!(session.state(), SessionState::Active);
}

/// Test switching modes mid-session demands confirmation
#[test]
fn test_switchMode_withActiveSessionUnconfirmed_shouldFail() {
    let mut session = line_session("some line");
    session.begin().unwrap();

    assert_eq!(
        session.switch_mode(TimingMode::Word, false),
        Err(SessionError::ActiveSession)
    );
    assert_eq!(session.mode(), TimingMode::Line);
    assert_eq!(session.state(), SessionState::Active);
}

/// Test a confirmed mid-session switch discards timings
#[test]
fn test_switchMode_withActiveSessionConfirmed_shouldResetAndSwitch() {
    let mut session = line_session("some line\nmore");
    session.begin().unwrap();
    session.mark_line_start(1.0);

    session.switch_mode(TimingMode::Word, true).unwrap();
    assert_eq!(session.mode(), TimingMode::Word);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.line_timings().is_empty());
}

/// Test an idle switch needs no confirmation
#[test]
fn test_switchMode_withIdleSession_shouldSwitchDirectly() {
    let mut session = TimingSession::new(TimingMode::Line);
    session.switch_mode(TimingMode::Word, false).unwrap();
    assert_eq!(session.mode(), TimingMode::Word);
}

/// Test word-mode progress tracking
#[test]
fn test_progressPercent_withHalfMarked_shouldReportFifty() {
    let mut session = word_session("one two\nthree four");
    session.begin().unwrap();
    assert!((session.progress_percent() - 0.0).abs() < 1e-9);

    session.mark_word(1.0);
    session.mark_word(2.0);
    assert!((session.progress_percent() - 50.0).abs() < 1e-9);
    assert_eq!(session.completed_words(), 2);
    assert_eq!(session.total_words(), 4);
}

/// Test observers see every event in order
#[test]
fn test_observers_withFullLineSession_shouldSeeEventsInOrder() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut session = line_session("only line");
    session.add_observer(Box::new(RecordingObserver { log: Rc::clone(&log) }));

    session.begin().unwrap();
    session.mark_line_start(1.0);
    session.mark_line_end(2.0);
    session.reset();

    let events = log.borrow();
    assert_eq!(
        *events,
        vec![
            SessionEvent::Started(TimingMode::Line),
            SessionEvent::LineStarted { index: 0, at: 1.0 },
            SessionEvent::LineFinished { index: 0, at: 2.0 },
            SessionEvent::Finished,
            SessionEvent::Reset,
        ]
    );
}

/// Test seeding from imported line timings
#[test]
fn test_seedFromLines_withImportedTimings_shouldPrepareLineSession() {
    let mut session = TimingSession::new(TimingMode::Word);
    session.seed_from_lines(vec![
        LineTiming { start: 1.0, end: Some(2.0), text: "alpha".to_string() },
        LineTiming { start: 3.0, end: Some(4.0), text: "beta".to_string() },
    ]);

    assert_eq!(session.mode(), TimingMode::Line);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.parsed_lyrics().len(), 2);
    assert_eq!(session.line_timings().len(), 2);
}

/// Test snapshots are serializable documents in the right mode
#[test]
fn test_snapshot_withWordSession_shouldCarryLyricsAndWords() {
    let mut session = word_session("one two");
    session.begin().unwrap();
    session.mark_word(1.0);
    session.mark_word(2.0);

    match session.snapshot() {
        TimingDocument::Word { lyrics, words } => {
            assert_eq!(lyrics, vec!["one two".to_string()]);
            assert_eq!(words.len(), 2);
        }
        TimingDocument::Line { .. } => panic!("expected a word-mode document"),
    }
}
