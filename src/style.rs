//! Cell decoration: header title-casing and SGR escape wrapping.
//!
//! Styles are [`crossterm::style::ContentStyle`] values. Applying one wraps the
//! text in the escape sequences crossterm emits for it; an empty style leaves
//! the text alone. Width measurement skips those sequences, so decorated text
//! lines up with plain text.
//!
//! ```rust
//! use boxtable::style::{apply, title};
//! use crossterm::style::{ContentStyle, Stylize};
//!
//! assert_eq!(title("first_name"), "FIRST NAME");
//! let red = ContentStyle::new().red();
//! assert!(apply("x", &red).contains("\x1b["));
//! assert_eq!(apply("x", &ContentStyle::new()), "x");
//! ```

use crossterm::style::{Attribute, ContentStyle, Stylize};

/// Style applied to auto-formatted header and footer labels.
pub fn label_style() -> ContentStyle {
    ContentStyle::new().attribute(Attribute::Bold)
}

/// Wraps `text` in the escape sequences for `style`.
///
/// Empty text and empty styles pass through unchanged.
pub fn apply(text: &str, style: &ContentStyle) -> String {
    if text.is_empty() || *style == ContentStyle::default() {
        return text.to_owned();
    }
    style.apply(text).to_string()
}

/// Applies `styles[index]` to `text`, if there is one.
pub fn apply_at(text: &str, styles: &[ContentStyle], index: usize) -> String {
    match styles.get(index) {
        Some(style) => apply(text, style),
        None => text.to_owned(),
    }
}

fn is_num_or_space(c: char) -> bool {
    c.is_ascii_digit() || c == ' '
}

/// Turns an identifier-like label into a display title.
///
/// Underscores become spaces, as do dots that are not part of a number such
/// as `0.0`. The result is trimmed and uppercased. A label that was non-empty
/// but trims down to nothing becomes a single space so blank lines in
/// multi-line headers survive.
///
/// # Examples
///
/// ```rust
/// use boxtable::style::title;
///
/// assert_eq!(title("user.name"), "USER NAME");
/// assert_eq!(title("ratio 0.5"), "RATIO 0.5");
/// assert_eq!(title("  "), " ");
/// assert_eq!(title(""), "");
/// ```
pub fn title(label: &str) -> String {
    let mut chars: Vec<char> = label.chars().collect();
    for i in 0..chars.len() {
        match chars[i] {
            '_' => chars[i] = ' ',
            // The left neighbour has already been rewritten at this point.
            '.' => {
                let before = i > 0 && !is_num_or_space(chars[i - 1]);
                let after = i + 1 < chars.len() && !is_num_or_space(chars[i + 1]);
                if before || after {
                    chars[i] = ' ';
                }
            }
            _ => {}
        }
    }
    let replaced: String = chars.into_iter().collect();

    let trimmed = replaced.trim();
    if trimmed.is_empty() && !label.is_empty() {
        return " ".to_owned();
    }
    trimmed.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::{display_width, strip_formatting};
    use crossterm::style::Color;

    #[test]
    fn test_title_replaces_separators() {
        assert_eq!(title("created_at"), "CREATED AT");
        assert_eq!(title("a.b"), "A B");
        assert_eq!(title("_id_"), "ID");
    }

    #[test]
    fn test_title_keeps_decimal_points() {
        assert_eq!(title("1.5"), "1.5");
        assert_eq!(title("v 1.0"), "V 1.0");
        assert_eq!(title(".5"), ".5");
    }

    #[test]
    fn test_title_sees_underscores_already_replaced() {
        assert_eq!(title("_.5"), ".5");
        assert_eq!(title("x_.5"), "X .5");
        assert_eq!(title("._"), " ");
    }

    #[test]
    fn test_styled_text_keeps_display_width() {
        let style = ContentStyle::new().with(Color::Green).on(Color::Black).bold();
        let out = apply("hello", &style);
        assert_ne!(out, "hello");
        assert_eq!(strip_formatting(&out), "hello");
        assert_eq!(display_width(&out), 5);
    }

    #[test]
    fn test_empty_text_is_never_styled() {
        assert_eq!(apply("", &label_style()), "");
    }

    #[test]
    fn test_apply_at_ignores_missing_styles() {
        let styles = [label_style()];
        assert_ne!(apply_at("a", &styles, 0), "a");
        assert_eq!(apply_at("a", &styles, 1), "a");
    }
}
