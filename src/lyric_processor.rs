/*!
 * Lyric text cleanup pipeline.
 *
 * A sequence of independent, order-sensitive string filters applied before a
 * timing session: header and markup stripping, blank-line collapsing,
 * punctuation removal, quote normalization, capitalization, emoji and
 * parenthesis stripping, midpoint line splitting, and find/replace. Every
 * filter is pure and total; disabled filters are no-ops.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// @const: Heading-marker lines (## ...)
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##.*$").unwrap());

// @const: Markdown emphasis/heading/link characters and quote markers
static MARKDOWN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_~`#\[\]()]|>\s").unwrap());

// @const: Standard emoji code-point ranges
static EMOJI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\
         \u{1F700}-\u{1F77F}\u{1F780}-\u{1F7FF}\u{1F800}-\u{1F8FF}\
         \u{1F900}-\u{1F9FF}\u{1FA00}-\u{1FA6F}\u{2600}-\u{26FF}\
         \u{2700}-\u{27BF}]",
    )
    .unwrap()
});

/// Toggles for the cleanup pipeline, in the order the filters run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Strip lines starting with a heading marker
    pub remove_headers: bool,
    /// Strip markdown emphasis/heading/link characters
    pub remove_markdown: bool,
    /// Drop blank lines
    pub remove_extra_spaces: bool,
    /// Remove periods
    pub remove_periods: bool,
    /// Remove commas
    pub remove_commas: bool,
    /// Replace straight apostrophes with curly ones
    pub smart_quotes: bool,
    /// Uppercase the first character of each line
    pub capitalize_lines: bool,
    /// Replace curly double quotes with straight ones
    pub standardize_quotes: bool,
    /// Remove parenthesis characters
    pub remove_parentheses: bool,
    /// Strip emoji characters
    pub remove_emojis: bool,
    /// Split lines longer than `max_chars` near their midpoint
    pub smart_line_split: bool,
    /// Character budget for `smart_line_split`
    pub max_chars: usize,
    /// Find pattern (regex, or literal when the pattern does not compile)
    pub find_text: String,
    /// Replacement text
    pub replace_text: String,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        NormalizationConfig {
            remove_headers: true,
            remove_markdown: true,
            remove_extra_spaces: true,
            remove_periods: true,
            remove_commas: true,
            smart_quotes: true,
            capitalize_lines: false,
            standardize_quotes: false,
            remove_parentheses: false,
            remove_emojis: false,
            smart_line_split: false,
            max_chars: 45,
            find_text: String::new(),
            replace_text: String::new(),
        }
    }
}

/// Apply the enabled filters in their fixed order
pub fn normalize(text: &str, options: &NormalizationConfig) -> String {
    let mut result = text.to_string();

    if options.remove_headers {
        result = remove_headers(&result);
    }
    if options.remove_markdown {
        result = remove_markdown(&result);
    }
    if options.remove_extra_spaces {
        result = remove_extra_spaces(&result);
    }
    if options.remove_periods {
        result = result.replace('.', "");
    }
    if options.remove_commas {
        result = result.replace(',', "");
    }
    if options.smart_quotes {
        result = result.replace('\'', "\u{2019}");
    }
    if options.capitalize_lines {
        result = capitalize_lines(&result);
    }
    if options.standardize_quotes {
        result = result.replace(['\u{201C}', '\u{201D}'], "\"");
    }
    if options.remove_parentheses {
        result = result.replace(['(', ')'], "");
    }
    if options.remove_emojis {
        result = EMOJI_REGEX.replace_all(&result, "").into_owned();
    }
    if options.smart_line_split {
        result = smart_line_split(&result, options.max_chars);
    }
    if !options.find_text.is_empty() && !options.replace_text.is_empty() {
        result = find_replace(&result, &options.find_text, &options.replace_text);
    }

    result
}

/// Strip lines matching the heading marker pattern
pub fn remove_headers(text: &str) -> String {
    HEADER_REGEX.replace_all(text, "").into_owned()
}

/// Strip markdown emphasis/heading/link-bracket characters
pub fn remove_markdown(text: &str) -> String {
    MARKDOWN_REGEX.replace_all(text, "").into_owned()
}

/// Drop blank lines
pub fn remove_extra_spaces(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Uppercase the first character of each non-blank line
pub fn capitalize_lines(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                return line.to_string();
            }
            let mut chars = line.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split any line longer than `max_chars` at the nearest space within
/// 10 characters of the midpoint, else at the midpoint itself
pub fn smart_line_split(text: &str, max_chars: usize) -> String {
    text.lines()
        .map(|line| split_long_line(line, max_chars))
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_long_line(line: &str, max_chars: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= max_chars {
        return line.to_string();
    }

    let middle = chars.len() / 2;
    let mut split_index = middle;
    for offset in 0..10 {
        if middle >= offset && chars.get(middle - offset) == Some(&' ') {
            split_index = middle - offset;
            break;
        }
        if chars.get(middle + offset) == Some(&' ') {
            split_index = middle + offset;
            break;
        }
    }

    let head: String = chars[..split_index].iter().collect();
    let tail: String = chars[split_index..].iter().collect();
    format!("{}\n{}", head.trim(), tail.trim())
}

/// Substitute `find` with `replace`, treating `find` as a regex and falling
/// back to a literal substitution when the pattern does not compile
pub fn find_replace(text: &str, find: &str, replace: &str) -> String {
    if find.is_empty() || replace.is_empty() {
        return text.to_string();
    }
    match Regex::new(find) {
        Ok(regex) => regex.replace_all(text, replace).into_owned(),
        Err(_) => text.replace(find, replace),
    }
}
