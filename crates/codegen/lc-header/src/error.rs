//! Header generation errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a header
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Target language is not `c` or `c++`
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// Language name as given
        language: String,
    },

    /// Writing the header file failed
    #[error("failed to write header file {}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
