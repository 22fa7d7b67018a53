/*!
 * Error types for the lyrcap application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised by timing-session preconditions and transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session start was requested without any lyrics text
    #[error("No lyrics entered - add lyrics before starting a timing session")]
    EmptyLyrics,

    /// Session start was requested without a loaded audio source
    #[error("No audio loaded - load an audio file before starting a timing session")]
    MissingAudio,

    /// A mode switch was requested while a session is active and unconfirmed
    #[error("A timing session is active - switching mode discards its timings and must be confirmed")]
    ActiveSession,
}

/// Errors that can occur while importing an existing caption file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The file contained no parseable cue blocks
    #[error("Invalid or empty SRT file: no cue blocks found")]
    NoEntries,

    /// A cue block carried a timestamp that does not match HH:MM:SS,mmm
    #[error("Invalid SRT timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A color value is not a #RRGGBB hex string
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    /// A numeric setting is out of its accepted range
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting {
        /// Setting name as it appears in the config file
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the timing session
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from caption import
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
