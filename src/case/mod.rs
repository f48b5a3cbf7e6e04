pub mod engine;

pub use engine::{convert, Convention, DELIMITERS};

use crate::error::{ParseCaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `example.word`
    Dot,
    /// `exampleWord`
    Camel,
    /// `example-word`
    Kebab,
    /// `example_word`
    Snake,
    /// `ExampleWord`
    Pascal,
    /// `Example-Word`
    Train,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Dot,
        Case::Camel,
        Case::Kebab,
        Case::Snake,
        Case::Pascal,
        Case::Train,
    ];

    pub fn convention(self) -> Convention {
        match self {
            Case::Dot => engine::DOT,
            Case::Camel => engine::CAMEL,
            Case::Kebab => engine::KEBAB,
            Case::Snake => engine::SNAKE,
            Case::Pascal => engine::PASCAL,
            Case::Train => engine::TRAIN,
        }
    }

    pub fn convert(self, source: &str) -> String {
        self.convention().apply(source)
    }

    pub fn try_convert(self, source: Option<&str>) -> Result<String> {
        convert(source, &self.convention())
    }

    /// True when converting `source` to this case leaves it unchanged
    pub fn is_conforming(self, source: &str) -> bool {
        self.convert(source) == source
    }

    /// Every case `source` already conforms to
    pub fn matching(source: &str) -> impl Iterator<Item = Case> + '_ {
        Self::ALL.into_iter().filter(move |case| case.is_conforming(source))
    }

    pub fn example(self) -> &'static str {
        match self {
            Case::Dot => "example.word",
            Case::Camel => "exampleWord",
            Case::Kebab => "example-word",
            Case::Snake => "example_word",
            Case::Pascal => "ExampleWord",
            Case::Train => "Example-Word",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Dot => "dot",
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Snake => "snake",
            Case::Pascal => "pascal",
            Case::Train => "train",
        }
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !DELIMITERS.contains(c))
            .collect::<String>()
            .to_lowercase();
        let name = normalized.strip_suffix("case").unwrap_or(&normalized);

        match name {
            "dot" => Ok(Case::Dot),
            "camel" | "lowercamel" => Ok(Case::Camel),
            "kebab" | "dash" => Ok(Case::Kebab),
            "snake" => Ok(Case::Snake),
            "pascal" | "uppercamel" => Ok(Case::Pascal),
            "train" => Ok(Case::Train),
            _ => Err(ParseCaseError(s.to_string())),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Convert `source` to `example.word`
pub fn to_dot_case<'a>(source: impl Into<Option<&'a str>>) -> Result<String> {
    Case::Dot.try_convert(source.into())
}

/// Convert `source` to `exampleWord`
pub fn to_camel_case<'a>(source: impl Into<Option<&'a str>>) -> Result<String> {
    Case::Camel.try_convert(source.into())
}

/// Convert `source` to `example-word`
pub fn to_kebab_case<'a>(source: impl Into<Option<&'a str>>) -> Result<String> {
    Case::Kebab.try_convert(source.into())
}

/// Convert `source` to `example_word`
pub fn to_snake_case<'a>(source: impl Into<Option<&'a str>>) -> Result<String> {
    Case::Snake.try_convert(source.into())
}

/// Convert `source` to `ExampleWord`
pub fn to_pascal_case<'a>(source: impl Into<Option<&'a str>>) -> Result<String> {
    Case::Pascal.try_convert(source.into())
}

/// Convert `source` to `Example-Word`
pub fn to_train_case<'a>(source: impl Into<Option<&'a str>>) -> Result<String> {
    Case::Train.try_convert(source.into())
}

/// Case conversions on string slices.
///
/// A borrowed `str` is never absent, so these never fail.
pub trait ToCase {
    fn to_case(&self, case: Case) -> String;

    fn to_dot_case(&self) -> String {
        self.to_case(Case::Dot)
    }

    fn to_camel_case(&self) -> String {
        self.to_case(Case::Camel)
    }

    fn to_kebab_case(&self) -> String {
        self.to_case(Case::Kebab)
    }

    fn to_snake_case(&self) -> String {
        self.to_case(Case::Snake)
    }

    fn to_pascal_case(&self) -> String {
        self.to_case(Case::Pascal)
    }

    fn to_train_case(&self) -> String {
        self.to_case(Case::Train)
    }
}

impl ToCase for str {
    fn to_case(&self, case: Case) -> String {
        case.convert(self)
    }
}
