//! # User Interface Elements
//!
//! Box-drawing banners and text layout helpers shared by every view.

use crate::config::BANNER_WIDTH;

/// Centers `text` within `width` columns, padding with spaces.
///
/// Width is measured in characters. Text that does not fit is returned as is.
///
/// # Examples
///
/// ```
/// use wanderings::center_text;
///
/// assert_eq!(center_text("Map", 7), "  Map  ");
/// assert_eq!(center_text("Journal", 3), "Journal");
/// ```
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// A horizontal rule of the standard banner width.
pub fn rule() -> String {
    "─".repeat(BANNER_WIDTH)
}

/// A three-line box with a centered title.
pub fn banner(title: &str) -> String {
    banner_with_width(title, BANNER_WIDTH)
}

/// A three-line box with a centered title and a custom inner width.
pub fn banner_with_width(title: &str, width: usize) -> String {
    format!(
        "╔{bar}╗\n║{title}║\n╚{bar}╝",
        bar = "═".repeat(width),
        title = center_text(title, width)
    )
}

/// Opening lines of a box whose body follows, e.g. the map grid.
pub fn banner_header(title: &str, width: usize) -> String {
    format!(
        "╔{bar}╗\n║{title}║\n╠{bar}╣",
        bar = "═".repeat(width),
        title = center_text(title, width)
    )
}

/// Closing line of a box opened with [`banner_header`].
pub fn banner_footer(width: usize) -> String {
    format!("╚{}╝", "═".repeat(width))
}

/// Pads a line with spaces to `width` columns.
pub fn pad_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_text_odd_padding() {
        assert_eq!(center_text("ab", 5), " ab  ");
        assert_eq!(center_text("", 2), "  ");
    }

    #[test]
    fn test_center_text_counts_characters() {
        assert_eq!(center_text("é", 3).chars().count(), 3);
    }

    #[test]
    fn test_banner_shape() {
        let banner = banner("Journal");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("Journal"));
        assert!(lines[2].ends_with('╝'));
        for line in lines {
            assert_eq!(line.chars().count(), BANNER_WIDTH + 2);
        }
    }

    #[test]
    fn test_pad_line() {
        assert_eq!(pad_line("ab", 4), "ab  ");
        assert_eq!(pad_line("abcdef", 4), "abcdef");
    }
}
