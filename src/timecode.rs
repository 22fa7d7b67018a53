/*!
 * Timecode formatting for every supported caption format.
 *
 * Each target format expresses time in its own base: SRT and WebVTT use
 * millisecond clock strings (differing only in the decimal separator),
 * ITT uses SMPTE frame timecodes at 25 fps, ASS uses centiseconds with a
 * single hour digit, and FCPXML uses rational frame durations over a fixed
 * 2500 denominator. Getting any of these wrong produces files that desync
 * or fail to import, so the converters live together here.
 */

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;

/// Frame rate shared by the SMPTE and FCPXML timebases
pub const FPS: u32 = 25;

// @const: SRT timestamp regex
static SRT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// Format seconds as an SRT timestamp (HH:MM:SS,mmm)
pub fn format_srt(seconds: f64) -> String {
    let (hours, minutes, secs, millis) = clock_parts_ms(seconds);
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Format seconds as a WebVTT timestamp (HH:MM:SS.mmm)
pub fn format_vtt(seconds: f64) -> String {
    let (hours, minutes, secs, millis) = clock_parts_ms(seconds);
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Format seconds as an SMPTE frame timecode (HH:MM:SS:FF at 25 fps)
pub fn format_smpte(seconds: f64) -> String {
    let whole = seconds.floor();
    let total_secs = whole as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let frames = ((seconds - whole) * f64::from(FPS)).floor() as u64;

    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, secs, frames)
}

/// Format seconds as an ASS event timestamp (H:MM:SS.cc)
pub fn format_ass(seconds: f64) -> String {
    let whole = seconds.floor();
    let total_secs = whole as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let centis = ((seconds - whole) * 100.0).floor() as u64;

    format!("{}:{:02}:{:02}.{:02}", hours, minutes, secs, centis)
}

/// Convert seconds to a whole frame count at 25 fps
pub fn seconds_to_frames(seconds: f64) -> u64 {
    (seconds * f64::from(FPS)).round() as u64
}

/// Format a frame count as an FCPXML rational duration (`frames*100/2500s`)
pub fn frame_duration(frames: u64) -> String {
    format!("{}/2500s", frames * 100)
}

/// Parse an SRT timestamp (HH:MM:SS,mmm) into seconds
pub fn parse_srt(timestamp: &str) -> Result<f64> {
    let caps = SRT_TIMESTAMP_REGEX
        .captures(timestamp.trim())
        .ok_or_else(|| anyhow!("Invalid SRT timestamp format: {}", timestamp))?;

    let field = |idx: usize| -> f64 {
        // The regex guarantees each field is a short digit run
        caps.get(idx).map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0))
    };

    Ok(field(1) * 3600.0 + field(2) * 60.0 + field(3) + field(4) / 1000.0)
}

/// Split seconds into clock components with millisecond precision.
/// Rounds to the nearest millisecond so an export/import cycle is lossless.
fn clock_parts_ms(seconds: f64) -> (u64, u64, u64, u64) {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    (hours, minutes, secs, millis)
}
