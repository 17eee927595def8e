//! Alignment and padding of cell text.
//!
//! Padding is measured with [`display_width`], so escape sequences and wide
//! glyphs do not throw columns out of line. Text already at or beyond the
//! target width is returned unchanged.
//!
//! # Default alignment
//!
//! A cell whose column has no explicit alignment is right-aligned when its
//! trimmed text looks like a number (`42`, `-3,200.50`) or a percentage
//! (`87%`), and left-aligned otherwise.
//!
//! ```rust
//! use boxtable::align::{Alignment, pad_center, pad_left, pad_right};
//!
//! assert_eq!(pad_right("ab", " ", 5), "ab   ");
//! assert_eq!(pad_left("ab", " ", 5), "   ab");
//! assert_eq!(pad_center("ab", " ", 5), " ab  ");
//! assert_eq!(Alignment::Default.resolve("42"), Alignment::Right);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::width::{display_width, strip_formatting};

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d+)?$").expect("invalid decimal regex")
});

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+\.?\d*%$").expect("invalid percent regex"));

/// Horizontal placement of text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Decide per cell: numbers to the right, everything else to the left.
    #[default]
    Default,
    /// Content first, fill after.
    Left,
    /// Fill first, content after.
    Right,
    /// Fill split around the content; an odd remainder goes to the right.
    Center,
}

impl Alignment {
    /// Maps a numeric alignment code to an alignment.
    ///
    /// Codes follow the classic tablewriter constants: `0` default, `1`
    /// center, `2` right, `3` left. Anything else is treated as default.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Alignment::Center,
            2 => Alignment::Right,
            3 => Alignment::Left,
            _ => Alignment::Default,
        }
    }

    /// Returns `self`, or `fallback` when `self` is [`Alignment::Default`].
    pub fn or(self, fallback: Alignment) -> Alignment {
        match self {
            Alignment::Default => fallback,
            explicit => explicit,
        }
    }

    /// Resolves [`Alignment::Default`] against the content of a cell.
    pub fn resolve(self, text: &str) -> Alignment {
        match self {
            Alignment::Default if is_numeric(text) => Alignment::Right,
            Alignment::Default => Alignment::Left,
            explicit => explicit,
        }
    }

    /// Pads `text` to `width` according to this alignment.
    ///
    /// `Default` is resolved from the text first.
    pub fn pad(self, text: &str, width: usize) -> String {
        match self.resolve(text) {
            Alignment::Right => pad_left(text, " ", width),
            Alignment::Center => pad_center(text, " ", width),
            _ => pad_right(text, " ", width),
        }
    }
}

/// Reports whether the trimmed, unformatted `text` is a decimal number or a
/// percentage.
///
/// # Examples
///
/// ```rust
/// use boxtable::align::is_numeric;
///
/// assert!(is_numeric("-3,200.50"));
/// assert!(is_numeric(" 87% "));
/// assert!(!is_numeric("1,23"));
/// assert!(!is_numeric(""));
/// ```
pub fn is_numeric(text: &str) -> bool {
    let plain = strip_formatting(text);
    let trimmed = plain.trim();
    DECIMAL.is_match(trimmed) || PERCENT.is_match(trimmed)
}

fn gap(text: &str, width: usize) -> usize {
    width.saturating_sub(display_width(text))
}

/// Left-aligns `text`, appending `fill` until it is `width` columns wide.
pub fn pad_right(text: &str, fill: &str, width: usize) -> String {
    format!("{}{}", text, fill.repeat(gap(text, width)))
}

/// Right-aligns `text`, prepending `fill` until it is `width` columns wide.
pub fn pad_left(text: &str, fill: &str, width: usize) -> String {
    format!("{}{}", fill.repeat(gap(text, width)), text)
}

/// Centers `text` within `width` columns.
///
/// The left side receives half the gap rounded down, so an odd column of
/// slack always lands on the right.
pub fn pad_center(text: &str, fill: &str, width: usize) -> String {
    let total = gap(text, width);
    let left = total / 2;
    format!("{}{}{}", fill.repeat(left), text, fill.repeat(total - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_percentages_align_right() {
        for text in ["42", "-3,200.50", "87%", "0.5", "-12.5%", "1234567", "1,000,000"] {
            assert_eq!(Alignment::Default.resolve(text), Alignment::Right, "{text}");
        }
    }

    #[test]
    fn test_other_text_aligns_left() {
        for text in ["hello", "", "1,23", "12a", "--1", "%", "1.2.3"] {
            assert_eq!(Alignment::Default.resolve(text), Alignment::Left, "{text}");
        }
    }

    #[test]
    fn test_explicit_alignment_beats_the_heuristic() {
        assert_eq!(Alignment::Left.resolve("42"), Alignment::Left);
        assert_eq!(Alignment::Center.resolve("hello"), Alignment::Center);
    }

    #[test]
    fn test_formatted_numbers_still_classify() {
        assert!(is_numeric("\x1b[32m99\x1b[0m"));
    }

    #[test]
    fn test_padding_reaches_target_width() {
        for width in 3..9 {
            for pad in [pad_left, pad_right, pad_center] {
                let out = pad("abc", " ", width);
                assert_eq!(display_width(&out), width);
                assert!(out.contains("abc"));
            }
        }
    }

    #[test]
    fn test_center_puts_odd_slack_on_the_right() {
        assert_eq!(pad_center("a", "-", 4), "-a--");
        assert_eq!(pad_center("a", "-", 5), "--a--");
    }

    #[test]
    fn test_padding_uses_display_width() {
        assert_eq!(pad_right("表", " ", 4), "表  ");
        assert_eq!(pad_left("\x1b[1mx\x1b[0m", " ", 3), "  \x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_overlong_text_is_untouched() {
        assert_eq!(pad_right("abcdef", " ", 3), "abcdef");
        assert_eq!(pad_center("abcdef", " ", 3), "abcdef");
    }

    #[test]
    fn test_codes_outside_the_table_fall_back_to_default() {
        assert_eq!(Alignment::from_code(1), Alignment::Center);
        assert_eq!(Alignment::from_code(3), Alignment::Left);
        assert_eq!(Alignment::from_code(17), Alignment::Default);
        assert_eq!(Alignment::from_code(-1), Alignment::Default);
    }

    #[test]
    fn test_or_keeps_explicit_values() {
        assert_eq!(Alignment::Default.or(Alignment::Right), Alignment::Right);
        assert_eq!(Alignment::Left.or(Alignment::Right), Alignment::Left);
    }
}
