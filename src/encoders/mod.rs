/*!
 * Format encoders: the output boundary of the core.
 *
 * Five serializers consume normalized cues and timecodes and produce
 * complete caption documents. Each is a pure function of its inputs and
 * returns an empty string when there is no timing data:
 * - `srt`: numbered SubRip cue blocks (line and coarse word variants) plus
 *   the inverse parser used for import
 * - `webvtt`: WebVTT with a STYLE block and per-word highlight cues
 * - `itt`: TTML/IMSC1 with SMPTE timecodes and highlight spans
 * - `ass`: Advanced SubStation Alpha with inline override tags
 * - `fcpxml`: a complete editor project document with wrapped title text
 * - `line_wrap`: the orphan-avoiding line breaker the editor export uses
 */

pub mod ass;
pub mod fcpxml;
pub mod itt;
pub mod line_wrap;
pub mod srt;
pub mod webvtt;

// Re-export main types
pub use fcpxml::TitleSettings;
