//! C and C++ header generation
//!
//! Turns a finished [`Registry`] into a header declaring every entry as a
//! `double`. A generated file is the banner, a blank line, the language
//! preamble, one commented declaration per registry entry (aliases included,
//! in registry order) and the language closing.

mod banner;
mod error;
mod language;

pub use banner::Banner;
pub use error::HeaderError;
pub use language::{Language, Template};

use lc_registry::{Constant, Registry};
use std::fmt;
use std::path::{Path, PathBuf};

/// Generates headers from a registry
pub struct HeaderGenerator<'reg> {
    registry: &'reg Registry,
    banner: Banner,
}

impl<'reg> HeaderGenerator<'reg> {
    /// Creates a generator with the default banner
    #[must_use]
    pub fn new(registry: &'reg Registry) -> Self {
        Self {
            registry,
            banner: Banner::default(),
        }
    }

    /// Replaces the banner
    #[must_use]
    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = banner;
        self
    }

    /// Whole header text for `language`
    #[must_use]
    pub fn render(&self, language: Language) -> String {
        RenderedHeader {
            generator: self,
            language,
        }
        .to_string()
    }

    /// Writes the header for `language` to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Io`] if the file cannot be written
    pub fn write(&self, path: &Path, language: Language) -> Result<(), HeaderError> {
        log::info!("installing {language} header file -> {}", path.display());
        let contents = self.render(language);
        std::fs::write(path, contents).map_err(|source| HeaderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`HeaderGenerator::write`], with the language given by name
    ///
    /// Nothing is written if the name is not `c` or `c++`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::UnsupportedLanguage`] for unknown names and
    /// [`HeaderError::Io`] if the file cannot be written
    pub fn emit(&self, path: &Path, language: &str) -> Result<(), HeaderError> {
        self.write(path, language.parse::<Language>()?)
    }

    /// Writes `<stem>.<ext>` into `dir` for each language, in order
    ///
    /// # Errors
    ///
    /// Stops at the first file that cannot be written
    pub fn write_all(&self, dir: &Path, stem: &str, languages: &[Language]) -> Result<Vec<PathBuf>, HeaderError> {
        let mut written = Vec::with_capacity(languages.len());
        for &language in languages {
            let path = dir.join(format!("{stem}.{}", language.extension()));
            self.write(&path, language)?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Writes the header for `language` to `path` with the default banner
///
/// # Errors
///
/// See [`HeaderGenerator::emit`]
pub fn emit(registry: &Registry, path: &Path, language: &str) -> Result<(), HeaderError> {
    HeaderGenerator::new(registry).emit(path, language)
}

/// Commented declaration of one constant
#[must_use]
pub fn render_constant(name: &str, constant: &Constant, language: Language) -> String {
    ConstantBlock {
        name,
        constant,
        language,
    }
    .to_string()
}

struct RenderedHeader<'generator, 'reg> {
    generator: &'generator HeaderGenerator<'reg>,
    language: Language,
}

impl fmt::Display for RenderedHeader<'_, '_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.language.template();

        write!(formatter, "{}", self.generator.banner)?;
        writeln!(formatter)?;
        for line in template.preamble {
            writeln!(formatter, "{line}")?;
        }
        writeln!(formatter)?;
        for (name, constant) in self.generator.registry.iter() {
            let block = ConstantBlock {
                name,
                constant,
                language: self.language,
            };
            write!(formatter, "{block}\n\n")?;
        }
        for line in template.closing {
            writeln!(formatter, "{line}")?;
        }
        Ok(())
    }
}

struct ConstantBlock<'block> {
    name: &'block str,
    constant: &'block Constant,
    language: Language,
}

impl fmt::Display for ConstantBlock<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.language.template();
        let constant = self.constant;

        writeln!(formatter, "/**")?;
        writeln!(formatter, " {}", constant.description)?;
        if let Some(unit) = &constant.unit {
            writeln!(formatter, " Unit: {unit}.")?;
        }
        if !constant.references.is_empty() {
            writeln!(formatter)?;
            for reference in &constant.references {
                writeln!(formatter, " - {reference}")?;
            }
        }
        writeln!(formatter, "**/")?;
        write!(
            formatter,
            "static {} double {}{} = {};",
            template.qualifier, template.prefix, self.name, constant.value
        )
    }
}
