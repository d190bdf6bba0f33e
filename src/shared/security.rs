use crate::shared::error::MavenizeError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Upper bound for any single file or archive entry read into memory
pub const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Validates that `path` exists and is a regular file, not a symlink
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - What the file is (e.g., "bundle graph"), for error messages
///
/// # Errors
/// Returns an error if the path is missing, a symbolic link, not a regular
/// file, or larger than [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| MavenizeError::FileReadError {
        path: path.to_path_buf(),
        details: format!("cannot read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(MavenizeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the link target directly".to_string(),
        }
        .into());
    }
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }
    validate_file_size(metadata.len(), path)
}

/// Validates file size is within [`MAX_FILE_SIZE`]
pub fn validate_file_size(file_size: u64, path: &Path) -> Result<()> {
    if file_size > MAX_FILE_SIZE {
        return Err(MavenizeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} bytes exceeds the limit of {} bytes",
                file_size, MAX_FILE_SIZE
            ),
            hint: "Embedded libraries and bundles of this size are not supported".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validates that a bundle-relative entry path stays inside its root
///
/// Classpath entries and archive entry names come from bundle metadata and
/// are joined onto directories on disk, so absolute paths and `..` are refused.
pub fn validate_entry_path(entry_path: &str) -> Result<()> {
    let path = Path::new(entry_path);
    let escapes = entry_path.trim().is_empty()
        || path.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
    if escapes {
        return Err(MavenizeError::SecurityError {
            path: path.to_path_buf(),
            reason: "entry path is empty, absolute or leaves the bundle root".to_string(),
            hint: "Bundle-ClassPath entries must be relative paths inside the bundle".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bundles.toml");
        fs::write(&file_path, "").unwrap();

        assert!(validate_regular_file(&file_path, "bundle graph").is_ok());
    }

    #[test]
    fn test_validate_regular_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "bundle graph");
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_regular_file_missing() {
        let result = validate_regular_file(&PathBuf::from("/nonexistent/graph.toml"), "graph");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.toml");
        let link = temp_dir.path().join("link.toml");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_regular_file(&link, "bundle graph").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MavenizeError>(),
            Some(MavenizeError::SecurityError { .. })
        ));
    }

    #[test]
    fn test_validate_file_size() {
        let path = PathBuf::from("lib.jar");
        assert!(validate_file_size(MAX_FILE_SIZE, &path).is_ok());
        assert!(validate_file_size(MAX_FILE_SIZE + 1, &path).is_err());
    }

    #[test]
    fn test_validate_entry_path() {
        assert!(validate_entry_path("lib/foo.jar").is_ok());
        assert!(validate_entry_path("./lib/foo.jar").is_ok());
        assert!(validate_entry_path("../foo.jar").is_err());
        assert!(validate_entry_path("lib/../../foo.jar").is_err());
        assert!(validate_entry_path("/etc/passwd").is_err());
        assert!(validate_entry_path("").is_err());
    }
}
