use crate::case::Case;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // Identifier shapes per target case; joiners other than the target's own are left out
    static ref WORD_IDENT: Regex = Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").unwrap();
    static ref DASHED_IDENT: Regex =
        Regex::new(r"\b[A-Za-z][A-Za-z0-9]*(?:[-_][A-Za-z0-9]+)*\b").unwrap();
    static ref DOTTED_IDENT: Regex =
        Regex::new(r"\b[A-Za-z][A-Za-z0-9]*(?:[._][A-Za-z0-9]+)*\b").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub start: usize, // Byte offset into the scanned content
    pub end: usize,
}

/// Extracts candidate identifiers from text
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
    min_length: usize,
}

impl Scanner {
    /// Scanner using the default identifier shape for `case`
    pub fn for_case(case: Case, min_length: usize) -> Self {
        let pattern = match case {
            Case::Snake | Case::Camel | Case::Pascal => WORD_IDENT.clone(),
            Case::Kebab | Case::Train => DASHED_IDENT.clone(),
            Case::Dot => DOTTED_IDENT.clone(),
        };

        Self {
            pattern,
            min_length,
        }
    }

    pub fn with_pattern(pattern: &str, min_length: usize) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid token pattern: {}", pattern))?;

        Ok(Self {
            pattern,
            min_length,
        })
    }

    pub fn scan(&self, content: &str) -> Vec<TokenSpan> {
        let mut spans = Vec::new();
        let mut line_start = 0;

        for (line_num, line) in content.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            for m in self.pattern.find_iter(line) {
                if m.as_str().chars().count() < self.min_length {
                    continue;
                }

                spans.push(TokenSpan {
                    text: m.as_str().to_string(),
                    line: line_num + 1,
                    column: line[..m.start()].graphemes(true).count() + 1, // 1-indexed
                    context: get_context(line, m.start(), m.end()),
                    start: line_start + m.start(),
                    end: line_start + m.end(),
                });
            }

            // raw line length, including a stripped '\r'
            line_start += content[line_start..]
                .find('\n')
                .map_or(content.len() - line_start, |idx| idx + 1);
        }

        spans
    }
}

fn get_context(line: &str, start: usize, end: usize) -> String {
    let mut from = start.saturating_sub(20);
    while !line.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + 20).min(line.len());
    while !line.is_char_boundary(to) {
        to += 1;
    }
    let context = &line[from..to];

    match (from > 0, to < line.len()) {
        (true, true) => format!("...{}...", context),
        (true, false) => format!("...{}", context),
        (false, true) => format!("{}...", context),
        (false, false) => context.to_string(),
    }
}
