//! Text measurement for the builtin Helvetica faces.
//!
//! Widths are Adobe AFM data in 1/1000 em for ASCII 32..=126; characters
//! outside that range fall back to an average width. Good enough for
//! alignment and wrapping of invoice text, which is overwhelmingly ASCII.

use super::command::Font;

/// Character widths for Helvetica (ASCII 32..=126) in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Character widths for Helvetica-Bold (ASCII 32..=126) in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Fallback for characters without AFM data.
const AVERAGE_WIDTH: u16 = 556;

fn char_width_units(c: char, font: Font) -> u16 {
    let table = match font {
        Font::Regular | Font::Oblique => &HELVETICA_WIDTHS,
        Font::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    let code = c as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        AVERAGE_WIDTH
    }
}

/// Width of a string in points at the given font size.
pub fn text_width(text: &str, font: Font, size: f64) -> f64 {
    let units: u64 = text.chars().map(|c| char_width_units(c, font) as u64).sum();
    units as f64 * size / 1000.0
}

/// Greedy word wrap to a maximum width. A single word wider than the
/// limit is hard-broken rather than overflowing the box.
pub fn wrap(text: &str, font: Font, size: f64, max_width: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, font, size) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width(word, font, size) <= max_width {
            current = word.to_string();
        } else {
            // Hard-break an overlong word character by character.
            let mut piece = String::new();
            for c in word.chars() {
                piece.push(c);
                if text_width(&piece, font, size) > max_width && piece.chars().count() > 1 {
                    piece.pop();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(c);
                }
            }
            current = piece;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shorten a string to fit a width, appending an ellipsis when truncated.
pub fn truncate_to_width(text: &str, font: Font, size: f64, max_width: f64) -> String {
    if text_width(text, font, size) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if text_width(&format!("{out}..."), font, size) > max_width {
            out.pop();
            break;
        }
    }
    format!("{out}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_size() {
        let w10 = text_width("Invoice", Font::Regular, 10.0);
        let w20 = text_width("Invoice", Font::Regular, 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-9);
    }

    #[test]
    fn bold_is_wider() {
        assert!(
            text_width("Total", Font::Bold, 10.0) > text_width("Total", Font::Regular, 10.0)
        );
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap(
            "Plot 14, Industrial Area Phase II, near the old flour mill",
            Font::Regular,
            9.0,
            120.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, Font::Regular, 9.0) <= 120.0, "{line:?}");
        }
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let lines = wrap("27AAPFU0939F1ZVXXXXXXXXXXXXX", Font::Regular, 9.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, Font::Regular, 9.0) <= 60.0);
        }
    }

    #[test]
    fn truncate_adds_ellipsis() {
        let out = truncate_to_width(
            "An impossibly long product description",
            Font::Regular,
            9.0,
            80.0,
        );
        assert!(out.ends_with("..."));
        assert!(text_width(&out, Font::Regular, 9.0) <= 80.0);
    }
}
