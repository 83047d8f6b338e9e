//! Text Measurement
//!
//! Utilities for measuring and wrapping text in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Emoji: 2 cells (most)
//! - Zero-width and control characters: 0 cells
//!
//! Layout measures with [`wrap_text`] and the painter draws with
//! [`wrap_spans`]. Both run the same line breaker, so a text node is always
//! painted on exactly the rows layout reserved for it.

use unicode_width::UnicodeWidthChar;

use crate::engine::Span;
use crate::types::{Attr, Rgba};

/// Display width of one character in terminal cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars().map(char_width).fold(0u16, u16::saturating_add)
}

/// A character together with the style of the span it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledChar {
    pub ch: char,
    pub fg: Option<Rgba>,
    pub attrs: Attr,
}

/// Flatten spans into styled characters.
pub fn styled_chars(spans: &[Span]) -> Vec<StyledChar> {
    spans
        .iter()
        .flat_map(|span| {
            span.content.chars().map(move |ch| StyledChar {
                ch,
                fg: span.fg,
                attrs: span.attrs,
            })
        })
        .collect()
}

fn width_of<T>(items: &[T], ch: &impl Fn(&T) -> char) -> u32 {
    items.iter().map(|item| char_width(ch(item)) as u32).sum()
}

/// Greedy word wrap of a single paragraph (no newlines inside).
///
/// Words move to the next line whole; the whitespace in front of a moved
/// word is dropped. Words wider than the line are broken by character.
/// Leading indentation on the first line is kept.
fn wrap_paragraph<T: Copy>(items: &[T], ch: &impl Fn(&T) -> char, width: u16) -> Vec<Vec<T>> {
    let width = width.max(1) as u32;
    let mut lines = Vec::new();
    let mut line: Vec<T> = Vec::new();
    let mut line_width = 0u32;
    let mut i = 0;

    while i < items.len() {
        let start = i;
        while i < items.len() && ch(&items[i]) == ' ' {
            i += 1;
        }
        let word_start = i;
        while i < items.len() && ch(&items[i]) != ' ' {
            i += 1;
        }

        let spaces = &items[start..word_start];
        let word = &items[word_start..i];
        let spaces_width = width_of(spaces, ch);
        let word_width = width_of(word, ch);

        if line_width + spaces_width + word_width <= width {
            line.extend_from_slice(spaces);
            line.extend_from_slice(word);
            line_width += spaces_width + word_width;
            continue;
        }

        // Trailing whitespace that overflows is dropped.
        if word.is_empty() {
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        } else if spaces_width < width {
            line.extend_from_slice(spaces);
            line_width = spaces_width;
        }

        for item in word {
            let w = char_width(ch(item)) as u32;
            if line_width + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(*item);
            line_width += w;
        }
    }

    lines.push(line);
    lines
}

fn wrap_items<T: Copy>(items: &[T], ch: impl Fn(&T) -> char, width: u16) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    items
        .split(|item| ch(item) == '\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, &ch, width))
        .collect()
}

/// Wrap text to fit within a given width.
///
/// Newlines always start a new line. Empty text produces no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    wrap_items(&chars, |c| *c, width)
        .into_iter()
        .map(|line| line.into_iter().collect())
        .collect()
}

/// Wrap styled spans to fit within a given width.
///
/// Breaks at the same places as [`wrap_text`] on the concatenated content.
pub fn wrap_spans(spans: &[Span], width: u16) -> Vec<Vec<StyledChar>> {
    wrap_items(&styled_chars(spans), |c| c.ch, width)
}

/// Measure the height of text when wrapped to a given width.
///
/// Returns the number of lines (minimum 1 for non-empty text, 0 for empty).
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    wrap_text(text, available_width).len().min(u16::MAX as usize) as u16
}

/// Width of the widest wrapped line.
pub fn wrapped_width(text: &str, available_width: u16) -> u16 {
    wrap_text(text, available_width)
        .iter()
        .map(|line| string_width(line))
        .max()
        .unwrap_or(0)
}

/// Width the text takes with no wrapping at all (widest paragraph).
pub fn max_content_width(text: &str) -> u16 {
    text.split('\n').map(string_width).max().unwrap_or(0)
}

/// Width of the widest unbreakable word.
pub fn min_content_width(text: &str) -> u16 {
    text.split([' ', '\n']).map(string_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::span;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_string_width_wide() {
        assert_eq!(string_width("日本"), 4);
        assert_eq!(string_width("📦"), 2);
    }

    #[test]
    fn test_wrap_text_fits() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_breaks_at_words() {
        assert_eq!(wrap_text("hello big world", 10), vec!["hello big", "world"]);
        assert_eq!(wrap_text("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("xy abcdefgh", 4), vec!["xy", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_text_newlines_and_indent() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("  indented text", 10), vec!["  indented", "text"]);
    }

    #[test]
    fn test_wrap_text_drops_overflowing_trailing_space() {
        assert_eq!(wrap_text("abcd   ", 4), vec!["abcd"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_measure_text_height() {
        assert_eq!(measure_text_height("", 10), 0);
        assert_eq!(measure_text_height("hello", 10), 1);
        assert_eq!(measure_text_height("hello big world", 10), 2);
        assert_eq!(measure_text_height("a\nb\nc", 10), 3);
    }

    #[test]
    fn test_content_widths() {
        assert_eq!(max_content_width("ab cd\nabcdef"), 6);
        assert_eq!(min_content_width("ab cdef g"), 4);
        assert_eq!(wrapped_width("hello big world", 10), 9);
    }

    #[test]
    fn test_wrap_spans_matches_wrap_text() {
        let spans = vec![span("hello ").bold(), span("big world").fg(Rgba::CYAN)];
        let lines = wrap_spans(&spans, 10);
        let plain: Vec<String> = lines.iter().map(|l| l.iter().map(|c| c.ch).collect()).collect();
        assert_eq!(plain, wrap_text("hello big world", 10));
        assert_eq!(lines[0][0].attrs, Attr::BOLD);
        assert_eq!(lines[1][0].fg, Some(Rgba::CYAN));
    }
}
