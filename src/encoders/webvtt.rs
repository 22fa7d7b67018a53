/*!
 * WebVTT encoding with per-word highlight cues.
 *
 * Emits a STYLE block binding the `.highlight` cue class to the configured
 * color, then one numbered cue per word with the active word wrapped in a
 * `<c.highlight>` span. End times use the flat next-word/+2.0s policy.
 */

use crate::color::RgbColor;
use crate::cue::{self, EndTimePolicy};
use crate::timecode;
use crate::timing::models::WordTiming;

/// Encode word timings as a complete WebVTT document
pub fn encode(words: &[WordTiming], lyrics: &[Vec<String>], highlight: RgbColor) -> String {
    if words.is_empty() {
        return String::new();
    }

    let mut vtt = String::from("WEBVTT\n\n");
    vtt.push_str("STYLE\n");
    vtt.push_str("::cue(.highlight) {\n");
    vtt.push_str(&format!("  background-color: {};\n", highlight.to_hex()));
    vtt.push_str("  color: white;\n");
    vtt.push_str("  font-weight: bold;\n");
    vtt.push_str("}\n\n");

    let cues = cue::word_cues(words, lyrics, EndTimePolicy::FlatPlusTwo);
    for (index, cue) in cues.iter().enumerate() {
        let marked_line = cue
            .text
            .split(' ')
            .enumerate()
            .map(|(word_index, word)| {
                if Some(word_index) == cue.highlight_word {
                    format!("<c.highlight>{}</c>", word)
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        vtt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            timecode::format_vtt(cue.start),
            timecode::format_vtt(cue.end),
            marked_line
        ));
    }

    vtt
}
