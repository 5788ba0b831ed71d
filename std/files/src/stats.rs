//! Text statistics used by `analyze_file`.

use std::fmt;

/// Character, word and line counts of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Unicode scalar values.
    pub characters: usize,
    /// Maximal runs of non-whitespace characters.
    pub words: usize,
    /// Newline-terminated segments; a final trailing newline adds no line.
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
            lines: text.lines().count(),
        }
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters: {}", thousands(self.characters))?;
        writeln!(f, "Words:      {}", thousands(self.words))?;
        write!(f, "Lines:      {}", thousands(self.lines))
    }
}

/// Format `n` with `,` between groups of three digits.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::stats::{TextStats, thousands};

    #[test]
    fn counts_short_text() {
        let stats = TextStats::of("a b\nc");
        assert_eq!(
            stats,
            TextStats {
                characters: 5,
                words: 3,
                lines: 2
            }
        );
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(TextStats::of("one\ntwo\n").lines, 2);
        assert_eq!(TextStats::of("one\r\ntwo\r\n").lines, 2);
        assert_eq!(TextStats::of("\n\n").lines, 2);
    }

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(TextStats::of(""), TextStats::default());
    }

    #[test]
    fn words_split_on_unicode_whitespace() {
        let stats = TextStats::of("  héllo\twörld \u{00A0}again\n");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 21);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn report_lines() {
        let text = TextStats {
            characters: 1500,
            words: 3,
            lines: 2,
        }
        .to_string();
        assert_eq!(text, "Characters: 1,500\nWords:      3\nLines:      2");
    }
}
