//! Atomic file output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ReportError, Result};

/// Write a file through a temp file and rename it into place.
///
/// The target either keeps its previous contents or receives the complete
/// new output.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path).map_err(|e| ReportError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    write(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| ReportError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ReportError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| ReportError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "wrote report file");
    Ok(())
}
