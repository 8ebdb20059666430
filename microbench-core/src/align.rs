// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Three-column row alignment for comparison reports.
//!
//! The left column is right-aligned, the centre column is centred and the
//! right column is left-aligned, so two values line up against a label in
//! the middle. Widths are counted in characters. Content longer than its
//! column is kept as is; alignment only ever adds padding.

/// Substituted for a missing column value.
pub const NULL_PLACEHOLDER: &str = "<ERROR NULL>";

/// Default widths of the left, centre and right columns.
pub const DEFAULT_WIDTHS: [usize; 3] = [25, 15, 25];

/// Default pad character.
pub const DEFAULT_PAD: char = ' ';

/// One aligned row of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    pub left: String,
    pub mid: String,
    pub right: String,
}

impl AlignedRow {
    /// Concatenate the three columns.
    pub fn join(&self) -> String {
        format!("{}{}{}", self.left, self.mid, self.right)
    }
}

/// Align a row with the default pad character and widths.
pub fn align(left: Option<&str>, mid: Option<&str>, right: Option<&str>) -> AlignedRow {
    align_with(left, mid, right, DEFAULT_PAD, DEFAULT_WIDTHS)
}

/// Align a row with an explicit pad character and column widths.
pub fn align_with(
    left: Option<&str>,
    mid: Option<&str>,
    right: Option<&str>,
    pad: char,
    widths: [usize; 3],
) -> AlignedRow {
    let [left_width, mid_width, right_width] = widths;
    AlignedRow {
        left: pad_start(left.unwrap_or(NULL_PLACEHOLDER), left_width, pad),
        mid: pad_center(mid.unwrap_or(NULL_PLACEHOLDER), mid_width, pad),
        right: pad_end(right.unwrap_or(NULL_PLACEHOLDER), right_width, pad),
    }
}

/// Pad the start of `text` up to `width` characters.
pub fn pad_start(text: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let mut out = String::with_capacity(text.len() + missing);
    out.extend(std::iter::repeat(pad).take(missing));
    out.push_str(text);
    out
}

/// Pad the end of `text` up to `width` characters.
pub fn pad_end(text: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let mut out = String::with_capacity(text.len() + missing);
    out.push_str(text);
    out.extend(std::iter::repeat(pad).take(missing));
    out
}

/// Pad both sides of `text` up to `width` characters; an odd pad character
/// goes on the right.
pub fn pad_center(text: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let before = missing / 2;
    let after = missing - before;
    let mut out = String::with_capacity(text.len() + missing);
    out.extend(std::iter::repeat(pad).take(before));
    out.push_str(text);
    out.extend(std::iter::repeat(pad).take(after));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alignment() {
        let row = align(Some("left"), Some("vs"), Some("right"));

        assert_eq!(row.left, format!("{}left", " ".repeat(21)));
        assert_eq!(row.mid, format!("{}vs{}", " ".repeat(6), " ".repeat(7)));
        assert_eq!(row.right, format!("right{}", " ".repeat(20)));
        assert_eq!(row.join().chars().count(), 65);
    }

    #[test]
    fn test_missing_values_use_placeholder() {
        let row = align(None, None, None);

        assert_eq!(row.left.trim_start(), NULL_PLACEHOLDER);
        assert_eq!(row.mid.trim(), NULL_PLACEHOLDER);
        assert_eq!(row.right.trim_end(), NULL_PLACEHOLDER);
        assert_eq!(row.left.chars().count(), 25);
    }

    #[test]
    fn test_long_content_is_kept_verbatim() {
        let long = "x".repeat(30);
        let row = align(Some(&long), Some("a label longer than fifteen"), Some(&long));

        assert_eq!(row.left, long);
        assert_eq!(row.mid, "a label longer than fifteen");
        assert_eq!(row.right, long);
    }

    #[test]
    fn test_custom_pad_and_widths() {
        let row = align_with(Some("7"), Some("mid"), Some("9"), '.', [4, 6, 3]);

        assert_eq!(row.left, "...7");
        assert_eq!(row.mid, ".mid..");
        assert_eq!(row.right, "9..");
    }

    #[test]
    fn test_widths_count_characters() {
        assert_eq!(pad_start("μs", 4, ' '), "  μs");
        assert_eq!(pad_end("μs", 4, '-'), "μs--");
        assert_eq!(pad_center("μ", 4, '*'), "*μ**");
    }

    #[test]
    fn test_content_preserved() {
        for text in ["", "a", "hello world", "  spaced  "] {
            for width in [0, 1, 5, 15, 25] {
                assert!(pad_start(text, width, ' ').ends_with(text));
                assert!(pad_end(text, width, ' ').starts_with(text));
                assert!(pad_center(text, width, ' ').contains(text));
                assert_eq!(
                    pad_center(text, width, ' ').chars().count(),
                    width.max(text.chars().count())
                );
            }
        }
    }
}
