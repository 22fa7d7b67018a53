/*!
 * ASS (Advanced SubStation Alpha) encoding with inline highlight overrides.
 *
 * Declares Default and Highlight styles in the `[V4+ Styles]` header with
 * the highlight color packed in the format's native BGR order, then one
 * Dialogue event per word. The active word switches color and bold with
 * inline override tags and reverts afterwards. End times use the flat
 * next-word/+2.0s policy.
 */

use crate::color::RgbColor;
use crate::cue::{self, EndTimePolicy};
use crate::timecode;
use crate::timing::models::WordTiming;

/// Encode word timings as a complete ASS document
pub fn encode(words: &[WordTiming], lyrics: &[Vec<String>], highlight: RgbColor) -> String {
    if words.is_empty() {
        return String::new();
    }

    let bgr = highlight.to_ass_bgr();

    let mut ass = String::from("[Script Info]\n");
    ass.push_str("Title: Word-Timed Subtitles\n");
    ass.push_str("ScriptType: v4.00+\n\n");

    ass.push_str("[V4+ Styles]\n");
    ass.push_str(
        "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n",
    );
    ass.push_str(
        "Style: Default,Arial,20,&Hffffff,&Hffffff,&H0,&H0,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1\n",
    );
    ass.push_str(&format!(
        "Style: Highlight,Arial,20,&H{bgr},&H{bgr},&H0,&H0,1,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1\n\n",
    ));

    ass.push_str("[Events]\n");
    ass.push_str("Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n");

    let cues = cue::word_cues(words, lyrics, EndTimePolicy::FlatPlusTwo);
    for cue in &cues {
        let marked_line = cue
            .text
            .split(' ')
            .enumerate()
            .map(|(word_index, word)| {
                if Some(word_index) == cue.highlight_word {
                    format!("{{\\c&H{bgr}&\\b1}}{word}{{\\c&Hffffff&\\b0}}")
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        ass.push_str(&format!(
            "Dialogue: 0,{},{},Default,,0,0,0,,{}\n",
            timecode::format_ass(cue.start),
            timecode::format_ass(cue.end),
            marked_line
        ));
    }

    ass
}
