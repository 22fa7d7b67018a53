/*!
 * ITT (TTML/IMSC1) encoding with per-word highlight spans.
 *
 * Produces the full TTML document the iTunes Timed Text flavor expects:
 * fixed namespace declarations, a `normal` style, the two fixed top/bottom
 * regions, SMPTE frame timecodes at 25 fps, and one `<p>` per word with the
 * active word in a bold span colored `rgba(r,g,b,255)`. End times use the
 * epsilon-before-next policy, looking across line boundaries.
 */

use crate::color::RgbColor;
use crate::cue::{self, EndTimePolicy};
use crate::timecode;
use crate::timing::models::WordTiming;

const TT_OPEN: &str = concat!(
    r#"<tt xmlns:tt_extension="http://www.w3.org/ns/ttml/extension/" xml:lang="en" "#,
    r#"xmlns:ttp="http://www.w3.org/ns/ttml#parameter" "#,
    r#"xmlns:ittp="http://www.w3.org/ns/ttml/profile/imsc1#parameter" "#,
    r#"xmlns:tt_feature="http://www.w3.org/ns/ttml/feature/" "#,
    r#"xmlns:ttm="http://www.w3.org/ns/ttml#metadata" "#,
    r#"xmlns:tts="http://www.w3.org/ns/ttml#styling" "#,
    r#"xmlns:tt_profile="http://www.w3.org/ns/ttml/profile/" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"ttp:frameRateMultiplier="1 1" xmlns:tt="http://www.w3.org/ns/ttml" "#,
    r#"ttp:frameRate="25" ttp:dropMode="nonDrop" xmlns:ebutts="urn:ebu:tt:style" "#,
    r#"ttp:timeBase="smpte" xmlns:itts="http://www.w3.org/ns/ttml/profile/imsc1#styling" "#,
    r#"xmlns:vt="http://namespace.itunes.apple.com/itt/ttml-extension#vertical" "#,
    r#"xmlns="http://www.w3.org/ns/ttml" "#,
    r#"xmlns:ry="http://namespace.itunes.apple.com/itt/ttml-extension#ruby">"#
);

/// Encode word timings as a complete ITT document
pub fn encode(words: &[WordTiming], lyrics: &[Vec<String>], highlight: RgbColor) -> String {
    if words.is_empty() {
        return String::new();
    }

    let highlight_color = highlight.to_itt_rgba();

    let mut itt = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    itt.push_str(TT_OPEN);
    itt.push_str("<head>");
    itt.push_str("<styling>");
    itt.push_str(
        r#"<style tts:color="white" tts:fontFamily="sansSerif" tts:fontSize="100%" tts:fontStyle="normal" tts:fontWeight="normal" xml:id="normal"/>"#,
    );
    itt.push_str("</styling>");
    itt.push_str("<layout>");
    itt.push_str(
        r#"<region tts:displayAlign="before" tts:extent="100% 15%" tts:origin="0% 0%" tts:textAlign="center" xml:id="top"/>"#,
    );
    itt.push_str(
        r#"<region tts:displayAlign="after" tts:extent="100% 15%" tts:origin="0% 85%" tts:textAlign="center" xml:id="bottom"/>"#,
    );
    itt.push_str("</layout>");
    itt.push_str("</head>");
    itt.push_str(r#"<body tts:color="white" style="normal" region="bottom">"#);
    itt.push_str(r#"<div begin="00:00:00:00">"#);

    let cues = cue::word_cues(words, lyrics, EndTimePolicy::EpsilonNextAware);
    for cue in &cues {
        let marked_line = cue
            .text
            .split(' ')
            .enumerate()
            .map(|(word_index, word)| {
                if Some(word_index) == cue.highlight_word {
                    format!(
                        r#"<span tts:fontWeight="bold" tts:color="{}">{}</span>"#,
                        highlight_color, word
                    )
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        itt.push_str(&format!(
            r#"<p begin="{}" end="{}">{}</p>"#,
            timecode::format_smpte(cue.start),
            timecode::format_smpte(cue.end),
            marked_line
        ));
    }

    itt.push_str("</div>");
    itt.push_str("</body>");
    itt.push_str("</tt>");

    itt
}
