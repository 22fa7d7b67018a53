/*!
 * Tests for the orphan-avoiding line wrapper
 */

use lyrcap::encoders::line_wrap;

/// Test text under the budget stays on one line
#[test]
fn test_wrap_withShortText_shouldReturnSingleLine() {
    assert_eq!(line_wrap::wrap("hello world", 20), vec!["hello world"]);
}

/// Test greedy filling splits at the budget
#[test]
fn test_wrap_withLongText_shouldFillGreedily() {
    let lines = line_wrap::wrap("a reasonably long phrase here ok", 20);
    assert_eq!(lines, vec!["a reasonably long", "phrase here ok"]);
}

/// Test a trailing short word absorbs into the previous line within the
/// overflow allowance
#[test]
fn test_wrap_withTrailingShortWord_shouldAbsorbWithinOverflow() {
    // "aaaa bb cc" at budget 10: "cc" would be orphaned but fits with the
    // 10% allowance (11 chars allowed)
    let lines = line_wrap::wrap("aaaa bb cc", 10);
    assert_eq!(lines, vec!["aaaa bb cc"]);
}

/// Test an orphan that cannot absorb pairs with the previous word instead
#[test]
fn test_wrap_withUnabsorbableOrphan_shouldPairWithPreviousWord() {
    // "aaaa bbbb cc": the first line fills to "aaaa bbbb" (9 chars), "cc"
    // cannot absorb (12 > 11), so "bbbb" moves down to keep it company
    let lines = line_wrap::wrap("aaaa bbbb cc", 10);
    assert_eq!(lines, vec!["aaaa", "bbbb cc"]);
}

/// Test the orphan stands alone when pairing would overflow too
#[test]
fn test_wrap_withNoRoomToPair_shouldEmitOrphanAlone() {
    let lines = line_wrap::wrap("aaaaa bb", 5);
    assert_eq!(lines, vec!["aaaaa", "bb"]);
}

/// Test a long trailing word is not treated as an orphan
#[test]
fn test_wrap_withLongTrailingWord_shouldNotTriggerOrphanHandling() {
    let lines = line_wrap::wrap("aaaa bbbb ccccc", 10);
    assert_eq!(lines, vec!["aaaa bbbb", "ccccc"]);
}

/// Test no word is lost or duplicated across splits
#[test]
fn test_wrap_withManyWords_shouldPreserveEveryWordOnce() {
    let text = "one two three four five six seven eight nine ten";
    let lines = line_wrap::wrap(text, 12);
    let rejoined = lines.join(" ");
    assert_eq!(rejoined, text);
}

/// Test empty input yields no lines
#[test]
fn test_wrap_withEmptyText_shouldReturnNoLines() {
    assert!(line_wrap::wrap("", 20).is_empty());
    assert!(line_wrap::wrap("   ", 20).is_empty());
}

/// Test multibyte text is measured in characters, not bytes
#[test]
fn test_wrap_withMultibyteText_shouldCountCharacters() {
    // "naïve" is five characters but six bytes; byte counting would push
    // "test" past the overflow allowance and orphan it
    let lines = line_wrap::wrap("naïve test", 10);
    assert_eq!(lines, vec!["naïve test"]);
}
