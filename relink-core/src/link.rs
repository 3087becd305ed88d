use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("failed to create hard link: {0}")]
    Filesystem(#[from] io::Error),

    #[error("verification failed: {} is not a hard link of {}", .link.display(), .existing.display())]
    VerificationFailed { existing: PathBuf, link: PathBuf },
}

/// Creates `new_link` as a hard link to `existing`, creating missing parent
/// directories first, then checks both names resolve to the same file.
///
/// A link that fails verification is left in place. Linking across devices
/// fails with `Filesystem`.
pub fn create_link(existing: &Path, new_link: &Path) -> Result<(), LinkError> {
    if let Some(parent) = new_link.parent() {
        fs::create_dir_all(parent).inspect_err(|e| {
            error!(dir = %parent.display(), "failed to create parent directory: {e}");
        })?;
    }

    match fs::hard_link(existing, new_link) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            error!(link = %new_link.display(), "target already exists");
            return Err(LinkError::TargetExists(new_link.to_path_buf()));
        }
        Err(e) => {
            error!(
                existing = %existing.display(),
                link = %new_link.display(),
                "failed to create hard link: {e}"
            );
            return Err(e.into());
        }
    }
    info!(link = %new_link.display(), "created hard link");

    let verified = same_file(existing, new_link).inspect_err(|e| {
        error!(link = %new_link.display(), "failed to verify hard link: {e}");
    })?;
    if !verified {
        error!(link = %new_link.display(), "verification failed: not a valid hard link");
        return Err(LinkError::VerificationFailed {
            existing: existing.to_path_buf(),
            link: new_link.to_path_buf(),
        });
    }
    Ok(())
}

/// True when both paths name the same underlying file (device + inode on
/// Unix, volume + file index on Windows).
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    same_file::is_same_file(a, b)
}
