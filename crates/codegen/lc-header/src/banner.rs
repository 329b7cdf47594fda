//! Copyright banner at the top of generated headers

use serde::Deserialize;
use std::fmt;

/// Attribution block written as `//` comment lines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Banner {
    /// First line, e.g. `LISA Constants.`
    pub title: String,
    /// Paragraphs following the title, line breaks kept
    pub summary: Vec<String>,
    /// One entry per author, `Name <email>`
    pub authors: Vec<String>,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            title: "LISA Constants.".to_string(),
            summary: vec![
                "This header provides values sanctioned by the LISA Consortium for physical constants and \
                 mission parameters."
                    .to_string(),
                "LISA Constants is intended to be consistently used by other pieces of software related to the \
                 simulation of\nthe instrument, of gravitational wave signals, and others."
                    .to_string(),
            ],
            authors: vec![
                "Jean-Baptiste Bayle <j2b.bayle@gmail.com>".to_string(),
                "Aurelien Hees <aurelien.hees@obspm.fr>".to_string(),
                "Maude Lejeune <lejeune@apc.in2p3.fr>".to_string(),
            ],
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "//")?;
        writeln!(formatter, "// {}", self.title)?;
        writeln!(formatter, "//")?;
        for paragraph in &self.summary {
            for line in paragraph.lines() {
                writeln!(formatter, "// {line}")?;
            }
            writeln!(formatter, "//")?;
        }
        if !self.authors.is_empty() {
            writeln!(formatter, "// Authors:")?;
            for author in &self.authors {
                writeln!(formatter, "//    {author}")?;
            }
            writeln!(formatter, "//")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_a_comment() {
        let text = Banner::default().to_string();
        assert!(text.lines().all(|line| line.starts_with("//")));
        assert!(text.contains("// LISA Constants."));
        assert!(text.contains("//    Maude Lejeune <lejeune@apc.in2p3.fr>"));
    }

    #[test]
    fn test_paragraph_line_breaks_are_kept() {
        let text = Banner::default().to_string();
        assert!(text.contains(
            "// LISA Constants is intended to be consistently used by other pieces of software related to the \
             simulation of\n// the instrument, of gravitational wave signals, and others.\n//\n"
        ));
    }

    #[test]
    fn test_banner_without_authors() {
        let banner = Banner {
            title: "Test.".to_string(),
            summary: Vec::new(),
            authors: Vec::new(),
        };
        assert_eq!(banner.to_string(), "//\n// Test.\n//\n");
    }
}
