//! Bill file loading.

use billsplit_core::BillState;
use std::fs;
use std::path::Path;

use crate::error::SplitError;

/// Read and parse a bill file.
///
/// A missing path is reported distinctly from other read failures. Parse
/// errors propagate unchanged, carrying line position and text.
pub fn load_bill(path: &Path) -> Result<BillState, SplitError> {
    if !path.exists() {
        return Err(SplitError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path).map_err(|source| SplitError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(billsplit_parser::parse(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_is_distinct() {
        let err = load_bill(&PathBuf::from("/definitely/not/here.bill")).unwrap_err();
        assert!(matches!(err, SplitError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let path = std::env::temp_dir().join("billsplit-load-valid.bill");
        std::fs::write(&path, "Pizza[Alice, Bob], 20.00\n").unwrap();

        let bill = load_bill(&path).unwrap();
        assert_eq!(bill.items().len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_malformed_file() {
        let path = std::env::temp_dir().join("billsplit-load-malformed.bill");
        std::fs::write(&path, "Pizza[Alice,Bob] 20.00\n").unwrap();

        let err = load_bill(&path).unwrap_err();
        assert!(matches!(err, SplitError::Parse(_)));

        std::fs::remove_file(&path).ok();
    }
}
