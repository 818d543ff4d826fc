//! Process-level error taxonomy for the CLI.

use billsplit_parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and splitting a bill file.
///
/// All variants render as single-line, human-readable messages; anything
/// outside this taxonomy is treated as unexpected and reported through the
/// top-level `anyhow` boundary.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input path does not exist.
    #[error("file '{}' not found", .path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// IO error reading a file that exists.
    #[error("failed to read file {}: {source}", .path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The bill file failed to parse.
    #[error("error on line {}: {}", .0.line, .0)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use billsplit_parser::ParseErrorKind;

    #[test]
    fn test_file_not_found_message() {
        let err = SplitError::FileNotFound {
            path: PathBuf::from("missing.bill"),
        };
        assert_eq!(format!("{err}"), "file 'missing.bill' not found");
    }

    #[test]
    fn test_parse_message_names_the_line() {
        let err = SplitError::from(ParseError::new(
            ParseErrorKind::MissingPriceSeparator,
            3,
            "Pizza[Alice,Bob] 20.00",
        ));
        let rendered = format!("{err}");
        assert!(rendered.starts_with("error on line 3:"));
        assert!(rendered.contains("Pizza[Alice,Bob] 20.00"));
    }
}
