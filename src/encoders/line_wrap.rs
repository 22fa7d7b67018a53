/*!
 * Greedy line breaking with orphan avoidance.
 *
 * Used by the editor-XML export to wrap caption text under a
 * character-per-line budget. Two look-ahead refinements distinguish this
 * from a plain greedy fill: a short upcoming word can pull the current word
 * onto the next line with it, and a short final word is kept off a line of
 * its own when a small overflow or a repaired pairing can absorb it.
 *
 * Known limitation: this is a heuristic, not an optimal paragraph fill -
 * there is no global raggedness minimization.
 */

/// Words at or below this length count as potential orphans
const SHORT_WORD_MAX: usize = 4;

/// Overflow factor allowed when absorbing a trailing orphan
const ORPHAN_OVERFLOW: f64 = 1.1;

fn is_short_word(word: &str) -> bool {
    word.chars().count() <= SHORT_WORD_MAX
}

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// The caller joins the returned lines with its own separator.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut current_length = 0usize;

    for (i, &word) in words.iter().enumerate() {
        let next_word = words.get(i + 1).copied();
        let word_length = word.chars().count();

        // A short last word would become an orphan on its own line
        if next_word.is_none() && is_short_word(word) && !current_line.is_empty() {
            if (current_length + word_length + 1) as f64 <= max_chars as f64 * ORPHAN_OVERFLOW {
                // Absorb it with a small overflow allowance
                current_line.push(word);
            } else {
                let previous_length = current_line
                    .last()
                    .map_or(0, |last| last.chars().count());
                if current_line.len() > 1 && word_length + previous_length + 1 <= max_chars {
                    // Move the current line's last word down to keep the
                    // orphan company
                    let last_word = current_line.pop().unwrap_or_default();
                    lines.push(current_line.join(" "));
                    lines.push(format!("{} {}", last_word, word));
                } else {
                    // Orphan it is
                    lines.push(current_line.join(" "));
                    lines.push(word.to_string());
                }
                current_line.clear();
                current_length = 0;
            }
            continue;
        }

        if current_length + word_length + 1 <= max_chars {
            current_line.push(word);
            current_length += word_length + 1;
        } else {
            if !current_line.is_empty() {
                lines.push(current_line.join(" "));
            }
            // The overflowing word seeds the new line. When the next word is
            // short and fits alongside it, this also keeps that word from
            // being stranded alone later.
            current_line = vec![word];
            current_length = word_length;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines
}
