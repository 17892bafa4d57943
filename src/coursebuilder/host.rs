//! Host file handling.
//!
//! The course only ever holds a [`FileRef`]; the bytes behind it belong to a
//! [`FileHost`]. Selecting a file hands it to the host, downloading asks the
//! host to write it back out.

use crate::error::{CourseError, Result};
use crate::model::FileRef;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const BLOB_DIR: &str = "files";

pub trait FileHost {
    /// Take ownership of a user-selected file and return a reference to it.
    fn import(&self, source: &Path) -> Result<FileRef>;

    /// Save the referenced file into `dest_dir` under its original name.
    fn export(&self, file: &FileRef, dest_dir: &Path) -> Result<PathBuf>;
}

/// Keeps a copy of every selected file in a blob directory.
pub struct LocalFileHost {
    blob_dir: PathBuf,
}

impl LocalFileHost {
    pub fn new(blob_dir: impl Into<PathBuf>) -> Self {
        Self {
            blob_dir: blob_dir.into(),
        }
    }

    pub fn blob_dir(&self) -> &Path {
        &self.blob_dir
    }

    /// Location of the stored copy. Blob keys are plain file names; anything
    /// that could resolve outside the blob directory is refused.
    pub fn blob_path(&self, file: &FileRef) -> Result<PathBuf> {
        let blob = file.blob.as_str();
        if blob.is_empty() || blob == "." || blob == ".." || blob.contains(['/', '\\']) {
            return Err(CourseError::Store(format!("Invalid blob key: {}", blob)));
        }
        Ok(self.blob_dir.join(blob))
    }
}

impl FileHost for LocalFileHost {
    fn import(&self, source: &Path) -> Result<FileRef> {
        let meta = fs::metadata(source).map_err(CourseError::Io)?;
        if !meta.is_file() {
            return Err(CourseError::Api(format!(
                "Not a file: {}",
                source.display()
            )));
        }
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CourseError::Api(format!("Not a file: {}", source.display())))?;

        if !self.blob_dir.exists() {
            fs::create_dir_all(&self.blob_dir).map_err(CourseError::Io)?;
        }
        let blob = format!("{}-{}", Uuid::new_v4(), name);
        fs::copy(source, self.blob_dir.join(&blob)).map_err(CourseError::Io)?;
        debug!(blob = %blob, size = meta.len(), "imported file");

        Ok(FileRef {
            name,
            blob,
            size: meta.len(),
        })
    }

    fn export(&self, file: &FileRef, dest_dir: &Path) -> Result<PathBuf> {
        let source = self.blob_path(file)?;
        if !source.exists() {
            return Err(CourseError::Store(format!(
                "Stored copy of {} is missing",
                file.name
            )));
        }
        if !dest_dir.exists() {
            fs::create_dir_all(dest_dir).map_err(CourseError::Io)?;
        }
        // Only the final component of the recorded name is used
        let name = Path::new(&file.name)
            .file_name()
            .ok_or_else(|| CourseError::Store(format!("Invalid file name: {}", file.name)))?;
        let dest = dest_dir.join(name);
        fs::copy(&source, &dest).map_err(CourseError::Io)?;
        debug!(dest = %dest.display(), "exported file");
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn import_then_export_round_trips_bytes() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("lecture.pdf");
        fs::write(&source, b"%PDF-1.4 body").unwrap();

        let host = LocalFileHost::new(temp.path().join("blobs"));
        let file = host.import(&source).unwrap();
        assert_eq!(file.name, "lecture.pdf");
        assert_eq!(file.size, 13);
        assert!(host.blob_path(&file).unwrap().exists());

        // The original can go away; the course keeps its own copy
        fs::remove_file(&source).unwrap();

        let out = host.export(&file, &temp.path().join("downloads")).unwrap();
        assert_eq!(out, temp.path().join("downloads").join("lecture.pdf"));
        assert_eq!(fs::read(out).unwrap(), b"%PDF-1.4 body");
    }

    #[test]
    fn import_rejects_directories_and_missing_files() {
        let temp = TempDir::new().unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));
        assert!(host.import(temp.path()).is_err());
        assert!(host.import(&temp.path().join("missing.pdf")).is_err());
    }

    #[test]
    fn export_missing_blob_fails() {
        let temp = TempDir::new().unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));
        let file = FileRef {
            name: "gone.pdf".into(),
            blob: "nope".into(),
            size: 0,
        };
        assert!(host.export(&file, temp.path()).is_err());
    }

    fn stored(host: &LocalFileHost, temp: &TempDir, name: &str) -> FileRef {
        let source = temp.path().join("notes.pdf");
        fs::write(&source, b"notes").unwrap();
        let mut file = host.import(&source).unwrap();
        file.name = name.to_string();
        file
    }

    #[test]
    fn export_keeps_only_final_name_component() {
        let temp = TempDir::new().unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));
        let dest = temp.path().join("dl");

        let file = stored(&host, &temp, "../escaped.pdf");
        let out = host.export(&file, &dest).unwrap();
        assert_eq!(out, dest.join("escaped.pdf"));
        assert!(!temp.path().join("escaped.pdf").exists());

        let absolute = temp.path().join("abs.pdf");
        let file = stored(&host, &temp, absolute.to_str().unwrap());
        let out = host.export(&file, &dest).unwrap();
        assert_eq!(out, dest.join("abs.pdf"));
        assert!(!absolute.exists());
    }

    #[test]
    fn export_rejects_name_without_file_component() {
        let temp = TempDir::new().unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));
        let file = stored(&host, &temp, "..");
        assert!(matches!(
            host.export(&file, &temp.path().join("dl")),
            Err(CourseError::Store(_))
        ));
    }

    #[test]
    fn blob_keys_with_separators_are_refused() {
        let temp = TempDir::new().unwrap();
        let secret = temp.path().join("secret.txt");
        fs::write(&secret, b"secret").unwrap();
        let host = LocalFileHost::new(temp.path().join("blobs"));

        for blob in ["../secret.txt", secret.to_str().unwrap(), "..", ""] {
            let file = FileRef {
                name: "x.pdf".into(),
                blob: blob.into(),
                size: 0,
            };
            assert!(host.blob_path(&file).is_err(), "accepted {:?}", blob);
            assert!(host.export(&file, &temp.path().join("dl")).is_err());
        }
        assert!(!temp.path().join("dl").join("x.pdf").exists());
    }
}
