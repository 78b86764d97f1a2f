use std::path::PathBuf;

use crate::error::{Result, ViewerError};

/// Validate the result of a multi-select "load both" dialog.
///
/// An empty selection means the dialog was cancelled and yields `Ok(None)`.
/// Exactly two paths are returned in selection order. Any other count is
/// rejected rather than guessing which view a single file was meant for.
pub fn expect_pair(paths: Vec<PathBuf>) -> Result<Option<[PathBuf; 2]>> {
    match <[PathBuf; 2]>::try_from(paths) {
        Ok(pair) => Ok(Some(pair)),
        Err(paths) if paths.is_empty() => Ok(None),
        Err(paths) => Err(ViewerError::SelectionCount { count: paths.len() }),
    }
}
