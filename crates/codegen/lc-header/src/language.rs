//! Target languages and their templates

use crate::error::HeaderError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Language a header is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    /// C, declarations prefixed with `LISA_`
    C,
    /// C++, declarations inside `LisaConstants::Constants`
    Cpp,
}

/// Fixed text and declaration shape for one language
#[derive(Debug)]
pub struct Template {
    /// Canonical language name
    pub name: &'static str,
    /// Extension of the generated file
    pub extension: &'static str,
    /// Lines opening the file
    pub preamble: &'static [&'static str],
    /// Lines closing the file
    pub closing: &'static [&'static str],
    /// Declaration qualifier after `static`
    pub qualifier: &'static str,
    /// Prefix of every declared symbol
    pub prefix: &'static str,
}

const C: Template = Template {
    name: "c",
    extension: "h",
    preamble: &["#ifndef LISACONSTANTS_H", "#define LISACONSTANTS_H", "#include <stdbool.h>"],
    closing: &["#endif"],
    qualifier: "const",
    prefix: "LISA_",
};

const CPP: Template = Template {
    name: "c++",
    extension: "hpp",
    preamble: &[
        "#pragma once",
        "#include <string>",
        "",
        "namespace LisaConstants {",
        "",
        "class Constants {",
        "public:",
    ],
    closing: &["};", "}"],
    qualifier: "constexpr",
    prefix: "",
};

impl Language {
    /// Every supported language
    pub const ALL: [Self; 2] = [Self::Cpp, Self::C];

    /// Template for this language
    #[must_use]
    pub fn template(self) -> &'static Template {
        match self {
            Self::C => &C,
            Self::Cpp => &CPP,
        }
    }

    /// Canonical name, `c` or `c++`
    #[must_use]
    pub fn name(self) -> &'static str {
        self.template().name
    }

    /// File extension, `h` or `hpp`
    #[must_use]
    pub fn extension(self) -> &'static str {
        self.template().extension
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = HeaderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.name() == name)
            .ok_or_else(|| HeaderError::UnsupportedLanguage { language: name.to_string() })
    }
}

impl TryFrom<String> for Language {
    type Error = HeaderError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!("c".parse::<Language>().unwrap(), Language::C);
        assert_eq!("c++".parse::<Language>().unwrap(), Language::Cpp);
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        for name in ["fortran", "C", "cpp", "c++ ", ""] {
            let error = name.parse::<Language>().unwrap_err();
            assert_eq!(error.to_string(), format!("unsupported language: {name}"));
        }
    }

    #[test]
    fn test_templates() {
        assert_eq!(Language::C.extension(), "h");
        assert_eq!(Language::Cpp.extension(), "hpp");
        assert_eq!(Language::C.template().prefix, "LISA_");
        assert_eq!(Language::Cpp.to_string(), "c++");
    }
}
