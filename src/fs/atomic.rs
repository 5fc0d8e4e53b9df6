//! Atomic file writes.
//!
//! Patched files are rewritten whole; writing through a temp file plus a
//! rename means a crash mid-write never leaves a truncated urls.py or
//! settings.py behind.
//!
//! The temp file is created in the same directory as the target (rename is
//! only atomic within one filesystem) and named `.{filename}.tmp`.

use crate::error::{DjstartError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomically write bytes to a file.
///
/// Writes the content to a temporary file, syncs it to disk, then replaces
/// the target file in a single rename.
///
/// # Returns
///
/// * `Ok(())` - On successful write
/// * `Err(DjstartError::UserError)` - On write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DjstartError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    replace_file(&temp_path, path)
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temp file path in the same directory as the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<std::path::PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DjstartError::UserError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DjstartError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            DjstartError::UserError(format!("failed to write temporary file: {}", e))
        })
}

/// Replace `target` with `source` via rename.
///
/// On POSIX, rename replaces an existing destination atomically. On Windows
/// it errors if the destination exists, so retry after removing the target;
/// the window where neither file exists is accepted there.
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(_) if cfg!(windows) && target.exists() => {
            fs::remove_file(target)
                .and_then(|()| fs::rename(source, target))
                .map_err(|e| {
                    let _ = fs::remove_file(source);
                    DjstartError::UserError(format!(
                        "failed to replace '{}': {}",
                        target.display(),
                        e
                    ))
                })
        }
        Err(e) => {
            let _ = fs::remove_file(source);
            Err(DjstartError::UserError(format!(
                "failed to replace '{}': {}",
                target.display(),
                e
            )))
        }
    }
}
