// Splitting text into independently animatable units.

use super::constants::LINE_TOP_TOLERANCE_PX;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Chars,
    Lines,
}

/// Whitespace-separated words in document order.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Characters of each word, one inner vector per word.
pub fn split_chars(text: &str) -> Vec<Vec<char>> {
    split_words(text)
        .into_iter()
        .map(|w| w.chars().collect())
        .collect()
}

/// Group consecutive words that share a rendered top offset into lines.
///
/// `tops` holds each word's top in layout order; the result covers every index.
pub fn group_lines(tops: &[f64]) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for i in 1..tops.len() {
        if (tops[i] - tops[start]).abs() >= LINE_TOP_TOLERANCE_PX {
            lines.push(start..i);
            start = i;
        }
    }
    if !tops.is_empty() {
        lines.push(start..tops.len());
    }
    lines
}

/// Join the words of one line back into its text.
pub fn line_text(words: &[&str], line: Range<usize>) -> String {
    words[line].join(" ")
}
