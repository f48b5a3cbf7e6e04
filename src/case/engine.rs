//! Single-pass word segmentation and re-emission under a naming convention

use crate::error::{CaseError, Result};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters recognized as explicit word separators in any input
pub const DELIMITERS: [char; 4] = [' ', '-', '_', '.'];

/// Renders the first character of a new word into the output.
///
/// The flag is true when no delimiter may be placed in front of the symbol
/// (start of output, or right after a delimiter or punctuation was emitted).
pub type WordStartHandler = fn(symbol: char, suppress_delimiter: bool, out: &mut String);

/// Target naming convention as seen by the segmentation pass
#[derive(Clone, Copy)]
pub struct Convention {
    /// Delimiter emitted between words, `None` for conventions that rely on case alone
    pub main_delimiter: Option<char>,
    pub start_word: WordStartHandler,
}

impl std::fmt::Debug for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Convention")
            .field("main_delimiter", &self.main_delimiter)
            .finish_non_exhaustive()
    }
}

impl Convention {
    pub const fn new(main_delimiter: Option<char>, start_word: WordStartHandler) -> Self {
        Self {
            main_delimiter,
            start_word,
        }
    }

    /// Re-segment `source` and render it under this convention.
    ///
    /// Single left-to-right pass; already emitted output is never revisited.
    pub fn apply(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() + source.len() / 4);

        let mut suppress_delimiter = true;
        let mut new_word = true;

        for symbol in source.chars() {
            if DELIMITERS.contains(&symbol) {
                if self.main_delimiter == Some(symbol) {
                    out.push(symbol);
                    suppress_delimiter = true;
                }

                new_word = true;
            } else if !is_letter_or_digit(symbol) {
                out.push(symbol);
                suppress_delimiter = true;
                new_word = true;
            } else if new_word || is_upper(symbol) {
                (self.start_word)(symbol, suppress_delimiter, &mut out);
                suppress_delimiter = false;
                new_word = false;
            } else {
                out.push(symbol);
            }
        }

        out
    }
}

/// Convert `source` with the given convention.
///
/// Fails with [`CaseError::InvalidArgument`] when `source` is absent; every
/// present string, including the empty one, converts successfully.
pub fn convert(source: Option<&str>, convention: &Convention) -> Result<String> {
    let source = source.ok_or(CaseError::InvalidArgument { name: "source" })?;
    Ok(convention.apply(source))
}

/// Letters of any category and decimal digits; other numbers such as `²` or `Ⅻ` are symbols
pub fn is_letter_or_digit(symbol: char) -> bool {
    matches!(
        get_general_category(symbol),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Only `Lu` counts; circled letters and other `Other_Uppercase` symbols do not
pub fn is_upper(symbol: char) -> bool {
    get_general_category(symbol) == GeneralCategory::UppercaseLetter
}

/// Invariant lowercase mapping that stays one character wide
pub fn lower(symbol: char) -> char {
    single(symbol.to_lowercase(), symbol)
}

/// Invariant uppercase mapping that stays one character wide
pub fn upper(symbol: char) -> char {
    single(symbol.to_uppercase(), symbol)
}

fn single(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

pub(crate) const DOT: Convention = Convention::new(Some('.'), |s, first, out| {
    if !first {
        out.push('.');
    }
    out.push(lower(s));
});

pub(crate) const CAMEL: Convention = Convention::new(None, |s, first, out| {
    out.push(if first { lower(s) } else { upper(s) });
});

pub(crate) const KEBAB: Convention = Convention::new(Some('-'), |s, first, out| {
    if !first {
        out.push('-');
    }
    out.push(lower(s));
});

pub(crate) const SNAKE: Convention = Convention::new(Some('_'), |s, first, out| {
    if !first {
        out.push('_');
    }
    out.push(lower(s));
});

pub(crate) const PASCAL: Convention = Convention::new(None, |s, _, out| {
    out.push(upper(s));
});

pub(crate) const TRAIN: Convention = Convention::new(Some('-'), |s, first, out| {
    if !first {
        out.push('-');
    }
    out.push(upper(s));
});
