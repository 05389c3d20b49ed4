//! Atomic manifest writes

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename in the target's own directory so the
/// rename never crosses a filesystem. A failed write leaves the original
/// file untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let result = (|| {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::write(path, e))?;

        temp_file
            .write_all(content)
            .map_err(|e| Error::write(path, e))?;

        temp_file.sync_all().map_err(|e| Error::write(path, e))?;

        fs::rename(&temp_path, path).map_err(|e| Error::write(path, e))
    })();

    if result.is_err() {
        // The temp file is useless once the write failed.
        let _ = fs::remove_file(&temp_path);
    }

    result
}
