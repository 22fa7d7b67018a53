/*!
 * FCPXML (video editor project) encoding.
 *
 * Emits a syntactically complete project document - resources, library,
 * event, project, sequence, and spine - with every line cue as a `<title>`
 * inside one top-level gap whose duration equals the last cue's end frame
 * count. Times are rational frame durations over a fixed 2500 denominator
 * at 25 fps, event and project nodes carry fresh v4 UUIDs, and caption text
 * is wrapped under the character budget before embedding.
 */

use chrono::Utc;
use uuid::Uuid;

use crate::color::RgbColor;
use crate::cue;
use crate::encoders::line_wrap;
use crate::timecode;
use crate::timing::models::LineTiming;

/// Title appearance settings for the editor export
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSettings {
    /// Font family name
    pub font_family: String,
    /// Font size in points
    pub font_size: u32,
    /// Title text color
    pub font_color: RgbColor,
    /// Character budget per wrapped line
    pub chars_per_line: usize,
}

impl Default for TitleSettings {
    fn default() -> Self {
        TitleSettings {
            font_family: "Helvetica".to_string(),
            font_size: 60,
            font_color: RgbColor { r: 255, g: 255, b: 255 },
            chars_per_line: 20,
        }
    }
}

/// Encode line timings as a complete FCPXML project document
pub fn encode(timings: &[LineTiming], settings: &TitleSettings) -> String {
    if timings.is_empty() {
        return String::new();
    }

    let cues = cue::raw_line_cues(timings);
    let font_color = settings.font_color.to_fcpxml_rgba();

    let titles = cues
        .iter()
        .enumerate()
        .map(|(index, cue)| {
            let start_frames = timecode::seconds_to_frames(cue.start);
            let duration_frames = timecode::seconds_to_frames(cue.end - cue.start);
            let wrapped_text =
                line_wrap::wrap(&cue.text, settings.chars_per_line).join("\n");

            format!(
                r#"                            <title ref="r2" lane="1" offset="{offset}" name="{name} - Basic Title" duration="{duration}">
                                <param name="Flatten" key="9999/999166631/999166633/2/351" value="1"/>
                                <param name="Alignment" key="9999/999166631/999166633/2/354/999169573/401" value="1 (Center)"/>
                                <param name="disableDRT" key="3733" value="1"/>
                                <text>
                                    <text-style ref="ts{style_id}">{text}</text-style>
                                </text>
                                <text-style-def id="ts{style_id}">
                                    <text-style font="{font}" fontSize="{size}" fontFace="Regular" fontColor="{color}" alignment="center"/>
                                </text-style-def>
                                <adjust-colorConform enabled="1" autoOrManual="manual" conformType="conformNone" peakNitsOfPQSource="1000" peakNitsOfSDRToPQSource="203"/>
                            </title>"#,
                offset = timecode::frame_duration(start_frames),
                name = cue.text,
                duration = timecode::frame_duration(duration_frames),
                style_id = index + 1,
                text = wrapped_text,
                font = settings.font_family,
                size = settings.font_size,
                color = font_color,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let total_frames =
        timecode::seconds_to_frames(cues.last().map_or(0.0, |cue| cue.end));
    let total_duration = timecode::frame_duration(total_frames);
    let mod_date = Utc::now().format("%Y-%m-%d %H:%M:%S +0000");
    let event_uid = new_uid();
    let project_uid = new_uid();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE fcpxml>

<fcpxml version="1.13">
    <resources>
        <format id="r1" name="FFVideoFormat1080p25" frameDuration="100/2500s" width="1920" height="1080" colorSpace="1-1-1 (Rec. 709)"/>
        <effect id="r2" name="Basic Title" uid=".../Titles.localized/Bumper:Opener.localized/Basic Title.localized/Basic Title.moti"/>
    </resources>
    <library>
        <event name="Lyrics Subtitles" uid="{event_uid}">
            <project name="Lyrics Subtitles" uid="{project_uid}" modDate="{mod_date}">
                <sequence format="r1" duration="{total_duration}" tcStart="0s" tcFormat="NDF" audioLayout="stereo" audioRate="48k">
                    <spine>
                        <gap name="Gap" offset="0s" duration="{total_duration}">
{titles}
                        </gap>
                    </spine>
                </sequence>
            </project>
        </event>
    </library>
</fcpxml>"#
    )
}

/// Fresh uppercase v4 UUID for event/project nodes
fn new_uid() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}
