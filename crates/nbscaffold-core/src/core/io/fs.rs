//! Existence-checked filesystem creation.
//!
//! Nothing in this module ever truncates, overwrites, or deletes a path that existed
//! before the call. A pre-existing target is reported as [`Outcome::Skipped`], which is
//! what lets a scaffold run be repeated over hand-edited trees.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Created,
    Skipped,
}

#[derive(Debug, Error)]
pub enum FsError {
    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Path '{path}' exists but is not a directory", path = path.display())]
    NotADirectory { path: PathBuf },
}

fn io_error(path: &Path, source: io::Error) -> FsError {
    FsError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates `path` and any missing parents; succeeds silently if it is already a directory.
pub fn ensure_dir(path: &Path) -> Result<Outcome, FsError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(Outcome::Skipped),
        Ok(_) => {
            return Err(FsError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_error(path, e)),
    }
    fs::create_dir_all(path).map_err(|e| io_error(path, e))?;
    trace!("Created directory {:?}", path);
    Ok(Outcome::Created)
}

/// Writes the bytes produced by `render` to `path` only if nothing exists there.
///
/// `render` is not invoked when the target already exists. The file is opened with
/// exclusive creation, so a target that appears between the check and the open is also
/// left untouched. The parent directory must already exist.
pub fn create_if_absent<F, E>(path: &Path, render: F) -> Result<Outcome, E>
where
    F: FnOnce() -> Result<Vec<u8>, E>,
    E: From<FsError>,
{
    if fs::symlink_metadata(path).is_ok() {
        return Ok(Outcome::Skipped);
    }

    let bytes = render()?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(Outcome::Skipped),
        Err(e) => return Err(io_error(path, e).into()),
    };

    if let Err(e) = file.write_all(&bytes).and_then(|_| file.flush()) {
        drop(file);
        // The file was created by this call, so removing it cannot destroy prior content.
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("Failed to remove partial file {:?}: {}", path, cleanup);
        }
        return Err(io_error(path, e).into());
    }
    trace!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(Outcome::Created)
}

/// Creates an empty marker file (e.g. `.gitkeep`) if absent.
pub fn touch_if_absent(path: &Path) -> Result<Outcome, FsError> {
    create_if_absent(path, || Ok::<_, FsError>(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;

    #[test]
    fn ensure_dir_creates_missing_parents() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a/b/c");
        assert_eq!(ensure_dir(&target).unwrap(), Outcome::Created);
        assert!(target.is_dir());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("chapters");
        ensure_dir(&target).unwrap();
        assert_eq!(ensure_dir(&target).unwrap(), Outcome::Skipped);
    }

    #[test]
    fn ensure_dir_rejects_existing_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("file");
        fs::write(&target, "x").unwrap();
        assert!(matches!(
            ensure_dir(&target),
            Err(FsError::NotADirectory { .. })
        ));
    }

    #[test]
    fn create_if_absent_writes_new_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("doc.ipynb");
        let outcome = create_if_absent(&target, || Ok::<_, FsError>(b"{}".to_vec())).unwrap();
        assert_eq!(outcome, Outcome::Created);
        assert_eq!(fs::read(&target).unwrap(), b"{}");
    }

    #[test]
    fn create_if_absent_never_renders_or_overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("doc.ipynb");
        fs::write(&target, "hand edited").unwrap();

        let rendered = Cell::new(false);
        let outcome = create_if_absent(&target, || {
            rendered.set(true);
            Ok::<_, FsError>(b"template".to_vec())
        })
        .unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert!(!rendered.get());
        assert_eq!(fs::read_to_string(&target).unwrap(), "hand edited");
    }

    #[test]
    fn create_if_absent_propagates_render_errors_without_creating() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("doc.ipynb");
        let result = create_if_absent(&target, || {
            Err(FsError::NotADirectory {
                path: PathBuf::from("render failed"),
            })
        });
        assert!(result.is_err());
        assert!(!target.exists());
    }

    #[test]
    fn create_if_absent_fails_when_parent_is_missing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing/doc.ipynb");
        let result = create_if_absent(&target, || Ok::<_, FsError>(Vec::new()));
        assert!(matches!(result, Err(FsError::Io { .. })));
    }

    #[test]
    fn touch_if_absent_creates_empty_marker_once() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join(".gitkeep");
        assert_eq!(touch_if_absent(&marker).unwrap(), Outcome::Created);
        assert_eq!(fs::metadata(&marker).unwrap().len(), 0);
        assert_eq!(touch_if_absent(&marker).unwrap(), Outcome::Skipped);
    }
}
