//! Width-aware padding helpers.
//!
//! Widths are display widths: ANSI escapes count as zero and wide Unicode
//! characters count as two.

use boxhead::Align;
use console::{measure_text_width, pad_str, Alignment};

/// Display width of `s` in terminal columns.
///
/// ```rust
/// use boxhead_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pad `s` to `width` with the given alignment. Never truncates.
///
/// When centering leaves an odd remainder, the extra space goes on the right.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let alignment = match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    };
    pad_str(s, width, alignment, None).into_owned()
}

/// `fill` repeated to exactly `width` columns.
pub fn rule(fill: &str, width: usize) -> String {
    if display_width(fill) == 0 {
        return " ".repeat(width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in fill.chars().cycle() {
        let w = display_width(c.encode_utf8(&mut [0; 4]));
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

/// True when `cell` reads as a number, ignoring thousands separators.
pub(crate) fn looks_numeric(cell: &str) -> bool {
    let cleaned: String = cell.trim().chars().filter(|c| *c != ',').collect();
    !cleaned.is_empty() && cleaned.parse::<f64>().is_ok()
}
