//! Display-width measurement for cell text.
//!
//! Cell strings may already carry ANSI SGR sequences (colors, bold) from the
//! caller or from the enriched append path. Those sequences occupy no terminal
//! columns, so every width in the layout engine is computed on the text with
//! escapes removed.
//!
//! Widths are measured per grapheme cluster using the usual terminal rules:
//! most glyphs are one column, East-Asian wide and fullwidth glyphs are two,
//! and combining marks contribute nothing.
//!
//! ```rust
//! use boxtable::width::display_width;
//!
//! assert_eq!(display_width("hello"), 5);
//! assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
//! assert_eq!(display_width("日本"), 4);
//! ```

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';

/// Removes terminal escape sequences from `s`.
///
/// Returns the input unchanged (and unallocated) when it contains no escape
/// character at all, which is the common case for plain cells.
pub fn strip_formatting(s: &str) -> Cow<'_, str> {
    if s.contains(ESC) {
        Cow::Owned(strip_ansi_escapes::strip_str(s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Returns the number of terminal columns `s` occupies when printed.
///
/// Escape sequences are skipped, wide glyphs count as two columns and
/// zero-width characters (combining marks, control characters) as none.
///
/// # Examples
///
/// ```rust
/// use boxtable::width::display_width;
///
/// assert_eq!(display_width(""), 0);
/// assert_eq!(display_width("e\u{301}"), 1);
/// assert_eq!(display_width("\x1b[1mNAME\x1b[0m"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    let plain = strip_formatting(s);
    if plain.is_ascii() {
        return plain.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    plain.graphemes(true).map(grapheme_width).sum()
}

/// Width of a single grapheme cluster, capped at two columns.
///
/// Emoji joined with ZWJ are one glyph on screen even though their parts
/// measure wide individually.
fn grapheme_width(grapheme: &str) -> usize {
    UnicodeWidthStr::width(grapheme).min(2)
}

/// Returns the widest line in `lines`, or zero for an empty slice.
pub fn max_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width_counts_bytes() {
        assert_eq!(display_width("hello world"), 11);
    }

    #[test]
    fn test_escapes_have_no_width() {
        assert_eq!(display_width("\x1b[1;31mAlice\x1b[0m"), 5);
        assert_eq!(display_width("\x1b[38;5;9m\x1b[39m"), 0);
    }

    #[test]
    fn test_wide_glyphs_count_double() {
        assert_eq!(display_width("表格"), 4);
        assert_eq!(display_width("ａｂ"), 4);
        assert_eq!(display_width("a表"), 3);
    }

    #[test]
    fn test_combining_marks_are_zero_width() {
        assert_eq!(display_width("cafe\u{301}"), 4);
    }

    #[test]
    fn test_strip_leaves_plain_text_borrowed() {
        assert!(matches!(strip_formatting("plain"), Cow::Borrowed("plain")));
        assert_eq!(strip_formatting("\x1b[2mdim\x1b[0m"), "dim");
    }

    #[test]
    fn test_max_width_of_lines() {
        assert_eq!(max_width(&["a", "abc", "ab"]), 3);
        assert_eq!(max_width::<&str>(&[]), 0);
    }
}
