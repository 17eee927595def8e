//! Horizontal border lines.
//!
//! Each column contributes a run of [`HORIZONTAL`] two wider than its content
//! width (one padding space on each side), and a junction glyph sits at every
//! column boundary.
//!
//! ```text
//! ┌──────┬─────┐   Edge::Top
//! ├──────┼─────┤   Edge::Middle
//! └──────┴─────┘   Edge::Bottom
//! ```
//!
//! [`selective_line`] draws a middle line where some column segments are left
//! blank, used between rows whose cells were merged vertically.

/// Horizontal fill.
pub const HORIZONTAL: &str = "─";
/// Vertical divider between cells.
pub const VERTICAL: &str = "│";
/// Top-left corner.
pub const TOP_LEFT: &str = "┌";
/// Junction on the top edge.
pub const TOP_MID: &str = "┬";
/// Top-right corner.
pub const TOP_RIGHT: &str = "┐";
/// Left tee on an inner line.
pub const MID_LEFT: &str = "├";
/// Interior cross.
pub const CROSS: &str = "┼";
/// Right tee on an inner line.
pub const MID_RIGHT: &str = "┤";
/// Bottom-left corner.
pub const BOTTOM_LEFT: &str = "└";
/// Junction on the bottom edge.
pub const BOTTOM_MID: &str = "┴";
/// Bottom-right corner.
pub const BOTTOM_RIGHT: &str = "┘";

/// Vertical position of a uniform border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The first line of the table.
    Top,
    /// Any separator between blocks or rows.
    Middle,
    /// The last line of the table.
    Bottom,
}

impl Edge {
    fn left(self) -> &'static str {
        match self {
            Edge::Top => TOP_LEFT,
            Edge::Middle => MID_LEFT,
            Edge::Bottom => BOTTOM_LEFT,
        }
    }

    /// Junction after a column, `last` being the outer right edge.
    fn junction(self, last: bool) -> &'static str {
        match (self, last) {
            (Edge::Top, true) => TOP_RIGHT,
            (Edge::Top, false) => TOP_MID,
            (Edge::Middle, true) => MID_RIGHT,
            (Edge::Middle, false) => CROSS,
            (Edge::Bottom, true) => BOTTOM_RIGHT,
            (Edge::Bottom, false) => BOTTOM_MID,
        }
    }
}

/// Builds a full-width border line terminated by `newline`.
///
/// # Examples
///
/// ```rust
/// use boxtable::border::{line, Edge};
///
/// assert_eq!(line(&[3, 1], Edge::Top, "\n"), "┌─────┬───┐\n");
/// assert_eq!(line(&[3, 1], Edge::Bottom, "\n"), "└─────┴───┘\n");
/// ```
pub fn line(widths: &[usize], edge: Edge, newline: &str) -> String {
    let mut out = String::from(edge.left());
    for (i, width) in widths.iter().enumerate() {
        out.push_str(&HORIZONTAL.repeat(width + 2));
        out.push_str(edge.junction(i + 1 == widths.len()));
    }
    out.push_str(newline);
    out
}

/// Builds an inner border line where only some column segments are drawn.
///
/// `draw[i]` says whether column `i` gets a horizontal segment; missing
/// entries count as drawn. Elided segments are blank fill of the same width.
/// Each boundary picks its glyph from the columns on either side of it.
///
/// # Examples
///
/// ```rust
/// use boxtable::border::selective_line;
///
/// assert_eq!(selective_line(&[1, 1], &[false, true], "\n"), "│   ├───┤\n");
/// assert_eq!(selective_line(&[1, 1], &[true, false], "\n"), "├───┤   │\n");
/// ```
pub fn selective_line(widths: &[usize], draw: &[bool], newline: &str) -> String {
    let mut out = String::new();
    let mut previous = false;

    for (i, width) in widths.iter().enumerate() {
        let next = draw.get(i).copied().unwrap_or(true);
        out.push_str(match (previous, next) {
            (true, true) => CROSS,
            (false, true) => MID_LEFT,
            (true, false) => MID_RIGHT,
            (false, false) => VERTICAL,
        });
        if next {
            out.push_str(&HORIZONTAL.repeat(width + 2));
        } else {
            out.push_str(&" ".repeat(width + 2));
        }
        previous = next;
    }

    out.push_str(if previous { MID_RIGHT } else { VERTICAL });
    out.push_str(newline);
    out
}
