use crate::mavenization::domain::BundleLocation;
use crate::ports::outbound::ArchiveReader;
use crate::shared::error::MavenizeError;
use crate::shared::security::{validate_entry_path, validate_file_size, validate_regular_file};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use walkdir::WalkDir;
use zip::result::ZipError;
use zip::ZipArchive;

/// FileSystemArchiveReader adapter reading exploded bundles and zip archives
///
/// Directory locations are read straight from disk; archive locations
/// (bundle jars, staged embedded libraries) are opened with `zip`.
pub struct FileSystemArchiveReader;

impl FileSystemArchiveReader {
    pub fn new() -> Self {
        Self
    }

    fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
        validate_regular_file(path, "archive")?;
        let file = File::open(path).map_err(|e| MavenizeError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        ZipArchive::new(file).map_err(|e| {
            MavenizeError::FileReadError {
                path: path.to_path_buf(),
                details: format!("not a readable zip archive: {}", e),
            }
            .into()
        })
    }

    fn read_from_directory(root: &Path, entry: &str) -> Result<Option<Vec<u8>>> {
        let path = root.join(entry);
        if !path.is_file() {
            return Ok(None);
        }
        validate_regular_file(&path, "bundle entry")?;
        fs::read(&path).map(Some).map_err(|e| {
            MavenizeError::FileReadError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_from_archive(path: &Path, entry: &str) -> Result<Option<Vec<u8>>> {
        let mut archive = Self::open_archive(path)?;
        let mut file = match archive.by_name(entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(MavenizeError::FileReadError {
                    path: path.to_path_buf(),
                    details: format!("cannot read entry '{}': {}", entry, e),
                }
                .into())
            }
        };
        if file.is_dir() {
            return Ok(None);
        }
        validate_file_size(file.size(), &path.join(entry))?;

        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)
            .map_err(|e| MavenizeError::FileReadError {
                path: path.to_path_buf(),
                details: format!("cannot read entry '{}': {}", entry, e),
            })?;
        Ok(Some(bytes))
    }
}

impl Default for FileSystemArchiveReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Archive entry name for a classpath entry (`./lib/a.jar` -> `lib/a.jar`)
fn normalize_entry(entry: &str) -> &str {
    entry.trim().trim_start_matches("./")
}

impl ArchiveReader for FileSystemArchiveReader {
    fn read_entry(
        &self,
        location: &BundleLocation,
        relative_path: &str,
    ) -> Result<Option<Vec<u8>>> {
        validate_entry_path(relative_path)?;
        let entry = normalize_entry(relative_path);
        match location {
            BundleLocation::Directory(root) => Self::read_from_directory(root, entry),
            BundleLocation::Archive(path) => Self::read_from_archive(path, entry),
        }
    }

    fn list_entries(&self, location: &BundleLocation) -> Result<Vec<String>> {
        match location {
            BundleLocation::Directory(root) => {
                let mut entries = Vec::new();
                for entry in WalkDir::new(root).sort_by_file_name() {
                    let entry = entry.map_err(|e| MavenizeError::FileReadError {
                        path: root.clone(),
                        details: e.to_string(),
                    })?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    if let Ok(relative) = entry.path().strip_prefix(root) {
                        let segments: Vec<String> = relative
                            .components()
                            .map(|c| c.as_os_str().to_string_lossy().into_owned())
                            .collect();
                        entries.push(segments.join("/"));
                    }
                }
                Ok(entries)
            }
            BundleLocation::Archive(path) => {
                let mut archive = Self::open_archive(path)?;
                let mut entries = Vec::with_capacity(archive.len());
                for i in 0..archive.len() {
                    let file = archive.by_index(i).map_err(|e| MavenizeError::FileReadError {
                        path: path.clone(),
                        details: e.to_string(),
                    })?;
                    if file.is_file() {
                        entries.push(file.name().to_string());
                    }
                }
                Ok(entries)
            }
        }
    }
}
