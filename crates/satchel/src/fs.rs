//! File-open conveniences.

use std::fs::File;
use std::io;
use std::path::Path;

/// Opens a file for reading, propagating any error.
pub fn open_file(path: impl AsRef<Path>) -> io::Result<File> {
    File::open(path)
}

/// Opens a CSV file for reading. Failures are logged and returned; the
/// caller decides whether a missing file is fatal.
pub fn open_csv_file(path: impl AsRef<Path>) -> io::Result<File> {
    let path = path.as_ref();
    File::open(path).inspect_err(|err| {
        tracing::warn!(path = %path.display(), %err, "could not open csv file");
    })
}
