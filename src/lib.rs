/*!
 * # lyrcap - Lyric timing to caption files
 *
 * A Rust library for turning per-line or per-word lyric timestamps into
 * caption and subtitle files.
 *
 * ## Features
 *
 * - Clean up raw lyric text with a configurable filter pipeline
 * - Capture line or word timings through an explicit session state machine
 * - Derive non-overlapping caption cues, including the per-format
 *   end-time inference the word exports need
 * - Export SRT, WebVTT, ITT (TTML), ASS, and FCPXML editor projects
 * - Re-import existing SRT files to seed a session
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `lyric_processor`: Lyric text cleanup pipeline
 * - `timing`: Timing records and the session state machine:
 *   - `timing::models`: Line/word timings, parsed lyrics, timing documents
 *   - `timing::session`: The capture state machine and its observer seam
 * - `cue`: Cue derivation (gap closing, end-time policies)
 * - `timecode`: Per-format timecode converters
 * - `color`: Hex color parsing and per-format color encodings
 * - `encoders`: The five format serializers and the line wrapper
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod color;
pub mod cue;
pub mod encoders;
pub mod errors;
pub mod file_utils;
pub mod lyric_processor;
pub mod timecode;
pub mod timing;

// Re-export main types for easier usage
pub use app_config::{CaptionFormat, Config};
pub use app_controller::Controller;
pub use color::RgbColor;
pub use cue::{Cue, EndTimePolicy};
pub use errors::{AppError, ImportError, SessionError};
pub use lyric_processor::NormalizationConfig;
pub use timing::{LineTiming, TimingMode, TimingSession, WordTiming};
