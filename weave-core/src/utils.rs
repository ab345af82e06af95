//! Shared utility functions for code generation.

use textwrap::{core::Fragment, wrap_algorithms::wrap_first_fit};

/// Return an identifier that is safe to emit (currently the name unchanged).
///
/// Reserved-word escaping and collision handling happen elsewhere.
pub fn safe_identifier(name: &str) -> &str {
    name
}

/// A space-separated word, measured in chars.
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    len: usize,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            len: text.chars().count(),
        }
    }
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.len as f64
    }

    fn whitespace_width(&self) -> f64 {
        1.0
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Greedily wrap `text` into lines of at most `width` chars.
///
/// Width is a char count, so combining marks and wide characters count as
/// one each. Words are split on ASCII spaces only and are never broken, so a
/// word longer than `width` ends up alone on an over-long line. Surrounding
/// whitespace is dropped and explicit newlines in `text` start a new line.
/// Blank input yields no lines.
pub fn word_wrap_lines(text: &str, width: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let line_widths = [width.max(1) as f64];
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let words: Vec<Word<'_>> = paragraph
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(Word::new)
            .collect();

        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        for line in wrap_first_fit(&words, &line_widths) {
            let line: Vec<&str> = line.iter().map(|word| word.text).collect();
            lines.push(line.join(" "));
        }
    }

    lines
}
