//! Splitting and wrapping of raw cell text into display lines.
//!
//! A cell is first split into paragraphs on explicit line breaks. With reflow
//! enabled the paragraphs are joined back into one, so the original breaks only
//! act as ordinary word boundaries. Each paragraph is then wrapped greedily on
//! whitespace.
//!
//! ```rust
//! use boxtable::wrap::{wrap_cell, WrapOptions};
//!
//! let opts = WrapOptions { max_width: 10, wrap: true, reflow: true };
//! let cell = wrap_cell("the quick brown fox", &opts);
//! assert_eq!(cell.lines, vec!["the quick", "brown fox"]);
//! assert_eq!(cell.width, 9);
//! ```

use crate::width::{display_width, max_width};

/// Options consulted when a cell is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Upper bound on the width of a wrapped line.
    pub max_width: usize,
    /// When false, paragraphs are kept as-is regardless of width.
    pub wrap: bool,
    /// When true, explicit line breaks are folded into the word stream.
    pub reflow: bool,
}

/// The wrapped lines of a cell together with their widest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedCell {
    /// Display lines, never empty.
    pub lines: Vec<String>,
    /// Display width of the widest entry in `lines`.
    pub width: usize,
}

/// Splits `text` into paragraphs on `\n`, dropping a trailing `\r` from each.
///
/// An empty string yields a single empty paragraph.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Greedily wraps one paragraph so that each line stays within `limit`.
///
/// Words are separated by whitespace. A word wider than `limit` is placed on
/// a line of its own and left intact. A paragraph with no words produces one
/// empty line.
///
/// # Examples
///
/// ```rust
/// use boxtable::wrap::wrap_words;
///
/// assert_eq!(wrap_words("aa bb cc", 5), vec!["aa bb", "cc"]);
/// assert_eq!(wrap_words("a extraordinary b", 4), vec!["a", "extraordinary", "b"]);
/// assert_eq!(wrap_words("", 4), vec![""]);
/// ```
pub fn wrap_words(paragraph: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= limit {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Turns raw cell text into display lines according to `opts`.
///
/// The wrap target is the smaller of `opts.max_width` and the widest
/// paragraph, so short multi-line cells keep their shape under reflow.
/// The reported width may exceed `opts.max_width` when wrapping is off or a
/// single word does not fit.
pub fn wrap_cell(text: &str, opts: &WrapOptions) -> WrappedCell {
    let paragraphs = split_paragraphs(text);

    if !opts.wrap {
        let lines: Vec<String> = paragraphs.into_iter().map(str::to_owned).collect();
        let width = max_width(&lines);
        return WrappedCell { lines, width };
    }

    let target = max_width(&paragraphs).min(opts.max_width);
    let lines: Vec<String> = if opts.reflow {
        wrap_words(&paragraphs.join(" "), target)
    } else {
        paragraphs
            .iter()
            .flat_map(|para| wrap_words(para, target))
            .collect()
    };
    let width = max_width(&lines);
    WrappedCell { lines, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(max_width: usize) -> WrapOptions {
        WrapOptions {
            max_width,
            wrap: true,
            reflow: true,
        }
    }

    #[test]
    fn test_empty_input_is_one_empty_line() {
        let cell = wrap_cell("", &opts(30));
        assert_eq!(cell.lines, vec![String::new()]);
        assert_eq!(cell.width, 0);
    }

    #[test]
    fn test_short_text_is_untouched() {
        let cell = wrap_cell("Alice", &opts(30));
        assert_eq!(cell.lines, vec!["Alice"]);
        assert_eq!(cell.width, 5);
    }

    #[test]
    fn test_wrapped_lines_respect_the_limit() {
        let text = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
        let cell = wrap_cell(text, &opts(12));
        assert!(cell.lines.len() > 1);
        for line in &cell.lines {
            assert!(display_width(line) <= 12, "{line:?} is too wide");
        }
        assert_eq!(cell.lines.join(" "), text);
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let cell = wrap_cell("a supercalifragilistic b", &opts(6));
        assert_eq!(cell.lines, vec!["a", "supercalifragilistic", "b"]);
        assert_eq!(cell.width, 20);
    }

    #[test]
    fn test_reflow_treats_breaks_as_spaces() {
        let cell = wrap_cell("one\ntwo three", &opts(30));
        assert_eq!(cell.lines, vec!["one two", "three"]);
    }

    #[test]
    fn test_without_reflow_breaks_are_kept() {
        let o = WrapOptions {
            reflow: false,
            ..opts(30)
        };
        let cell = wrap_cell("one\ntwo three", &o);
        assert_eq!(cell.lines, vec!["one", "two three"]);
        assert_eq!(cell.width, 9);
    }

    #[test]
    fn test_wrapped_paragraphs_follow_each_other_without_spacers() {
        let o = WrapOptions {
            reflow: false,
            ..opts(6)
        };
        let cell = wrap_cell("alpha beta\ngamma delta", &o);
        assert_eq!(cell.lines, vec!["alpha", "beta", "gamma", "delta"]);
        assert_eq!(cell.width, 5);
    }

    #[test]
    fn test_without_wrap_paragraphs_pass_through() {
        let o = WrapOptions {
            wrap: false,
            ..opts(4)
        };
        let cell = wrap_cell("a very long line\nb", &o);
        assert_eq!(cell.lines, vec!["a very long line", "b"]);
        assert_eq!(cell.width, 16);
    }

    #[test]
    fn test_carriage_returns_are_dropped() {
        assert_eq!(split_paragraphs("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_wrapping_measures_escaped_text_by_display_width() {
        let cell = wrap_cell("\x1b[1maa\x1b[0m bb cc", &opts(5));
        assert_eq!(cell.lines[0], "\x1b[1maa\x1b[0m bb");
        assert_eq!(cell.width, 5);
    }
}
