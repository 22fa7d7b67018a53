/*!
 * Timing model and session state machine.
 *
 * This module provides:
 * - The raw timing records captured during a session (line and word timings)
 * - Parsed lyrics derived from the cleaned text
 * - The `TimingSession` finite-state machine that is the only stateful,
 *   order-sensitive part of the core
 * - The observer seam display layers attach to
 */

// Allow dead code - session types have extra accessors for library consumers
#![allow(dead_code)]

pub mod models;
pub mod session;

// Re-export main types
pub use models::{LineTiming, ParsedLyrics, TimingDocument, TimingMode, WordTiming};
pub use session::{SessionEvent, SessionObserver, SessionState, TimingSession};
