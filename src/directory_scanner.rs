// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding photographs and setting aside the ones
//! without a usable position.
//!
//! [`PhotoFolder`] lists the files of one directory whose extension is in the
//! configured set, sorted by file name. [`Quarantine`] moves rejected files
//! into the filtered folder so a later run does not see them again.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The photographs found directly inside one directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFolder {
    directory: PathBuf,
    photos: Vec<PathBuf>,
}

impl PhotoFolder {
    /// Scans `directory` (not recursively) for files with one of
    /// `extensions`, compared case-insensitively.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(directory: &Path, extensions: &[String]) -> Result<Self> {
        let mut photos = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && has_photo_extension(&path, extensions) {
                photos.push(path);
            } else {
                log::debug!("ignoring {}", path.display());
            }
        }

        photos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self {
            directory: directory.to_path_buf(),
            photos,
        })
    }

    /// Returns the scanned directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the photographs in file-name order.
    pub fn photos(&self) -> &[PathBuf] {
        &self.photos
    }

    /// Returns the number of photographs found.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Checks if no photograph was found.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Checks if a file's extension is one of `extensions` (without the dot).
pub fn has_photo_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Destination for photographs whose position could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarantine {
    folder: PathBuf,
}

impl Quarantine {
    /// Opens the quarantine at `folder`, creating it if it does not exist.
    pub fn open(folder: &Path) -> Result<Self> {
        if !folder.exists() {
            fs::create_dir_all(folder)?;
            log::info!("created filtered folder {}", folder.display());
        }
        Ok(Self {
            folder: folder.to_path_buf(),
        })
    }

    /// Returns the quarantine folder.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Moves `photo` into the quarantine, keeping its file name, and returns
    /// the new path.
    ///
    /// A file already quarantined under the same name is never replaced; the
    /// move fails instead and `photo` stays where it is.
    pub fn admit(&self, photo: &Path) -> Result<PathBuf> {
        let file_name = photo
            .file_name()
            .ok_or_else(|| Error::Io(format!("{} has no file name", photo.display())))?;
        let destination = self.folder.join(file_name);

        if destination.exists() {
            return Err(Error::Io(format!(
                "failed to move {} to filtered folder: {} already exists",
                photo.display(),
                destination.display()
            )));
        }

        fs::rename(photo, &destination).map_err(|e| {
            Error::Io(format!(
                "failed to move {} to filtered folder: {e}",
                photo.display()
            ))
        })?;
        log::info!("moved {} to {}", photo.display(), destination.display());

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn jpg() -> Vec<String> {
        vec!["jpg".to_string()]
    }

    #[test]
    fn scan_keeps_only_configured_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.JPG");
        create_test_image(temp_dir.path(), "c.png");
        create_test_image(temp_dir.path(), "notes.txt");

        let folder = PhotoFolder::scan(temp_dir.path(), &jpg()).expect("failed to scan directory");

        assert_eq!(folder.len(), 2);
        assert_eq!(folder.directory(), temp_dir.path());
    }

    #[test]
    fn scan_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let folder = PhotoFolder::scan(temp_dir.path(), &jpg()).expect("failed to scan directory");

        assert_eq!(folder.photos(), &[img_a, img_b, img_c]);
    }

    #[test]
    fn scan_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("failed to create dir");
        create_test_image(temp_dir.path(), "a.jpg");

        let folder = PhotoFolder::scan(temp_dir.path(), &jpg()).expect("failed to scan directory");

        assert_eq!(folder.len(), 1);
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        let result = PhotoFolder::scan(Path::new("/nonexistent/photos"), &jpg());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn has_photo_extension_ignores_case() {
        let extensions = vec!["jpg".to_string(), "jpeg".to_string()];
        assert!(has_photo_extension(Path::new("x.JPG"), &extensions));
        assert!(has_photo_extension(Path::new("x.Jpeg"), &extensions));
        assert!(!has_photo_extension(Path::new("x.png"), &extensions));
        assert!(!has_photo_extension(Path::new("jpg"), &extensions));
    }

    #[test]
    fn quarantine_creates_folder_and_moves_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let photo = create_test_image(temp_dir.path(), "broken.jpg");
        let filtered = temp_dir.path().join("filtered");

        let quarantine = Quarantine::open(&filtered).expect("failed to open quarantine");
        assert!(filtered.is_dir());

        let moved = quarantine.admit(&photo).expect("failed to move file");
        assert_eq!(moved, filtered.join("broken.jpg"));
        assert!(moved.exists());
        assert!(!photo.exists());
    }

    #[test]
    fn quarantine_reports_failed_move() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let quarantine = Quarantine::open(temp_dir.path()).expect("failed to open quarantine");

        let result = quarantine.admit(&temp_dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(Error::Io(message)) if message.contains("filtered folder")));
    }

    #[test]
    fn quarantine_never_replaces_earlier_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first_run = temp_dir.path().join("first");
        let second_run = temp_dir.path().join("second");
        fs::create_dir(&first_run).expect("failed to create dir");
        fs::create_dir(&second_run).expect("failed to create dir");
        let filtered = temp_dir.path().join("filtered");
        let quarantine = Quarantine::open(&filtered).expect("failed to open quarantine");

        let earlier = create_test_image(&first_run, "IMG_0001.jpg");
        quarantine.admit(&earlier).expect("failed to move file");

        let later = second_run.join("IMG_0001.jpg");
        fs::write(&later, b"another photo").expect("failed to write test file");
        let result = quarantine.admit(&later);

        assert!(matches!(result, Err(Error::Io(message)) if message.contains("already exists")));
        assert!(later.exists());
        assert_eq!(
            fs::read(filtered.join("IMG_0001.jpg")).expect("failed to read file"),
            b"fake image data"
        );
    }
}
