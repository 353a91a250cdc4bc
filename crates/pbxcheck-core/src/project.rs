//! Project manifest location
//!
//! Finds the `.xcodeproj` bundle under a directory and reads the
//! `project.pbxproj` manifest inside it.

use crate::error::{AuditError, AuditResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Find the first `.xcodeproj` bundle directly under `dir`
///
/// Only the immediate entries of `dir` are considered, matching where
/// Xcode places the bundle relative to a project root.
///
/// # Errors
/// Returns [`AuditError::XcodeprojNotFound`] if no bundle is present.
pub fn find_xcodeproj(dir: &Path) -> AuditResult<PathBuf> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "xcodeproj") {
            return Ok(path);
        }
    }
    Err(AuditError::XcodeprojNotFound(dir.to_path_buf()))
}

/// Read the `project.pbxproj` manifest inside an `.xcodeproj` bundle
///
/// # Errors
/// Returns [`AuditError::ManifestNotFound`] if the manifest file is absent.
pub fn read_manifest(xcodeproj: &Path) -> AuditResult<String> {
    let manifest_path = xcodeproj.join("project.pbxproj");
    if !manifest_path.exists() {
        return Err(AuditError::ManifestNotFound(manifest_path));
    }
    Ok(fs::read_to_string(&manifest_path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_bundle_by_extension() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(dir.path().join("App.xcodeproj")).expect("mkdir");
        fs::write(dir.path().join("README.md"), "").expect("write");

        let bundle = find_xcodeproj(dir.path()).expect("should find bundle");
        assert_eq!(bundle.file_name().unwrap(), "App.xcodeproj");
    }

    #[test]
    fn missing_bundle_is_explicit_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let err = find_xcodeproj(dir.path()).unwrap_err();
        assert!(matches!(err, AuditError::XcodeprojNotFound(_)));
    }

    #[test]
    fn missing_manifest_is_explicit_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let bundle = dir.path().join("App.xcodeproj");
        fs::create_dir(&bundle).expect("mkdir");

        let err = read_manifest(&bundle).unwrap_err();
        assert!(matches!(err, AuditError::ManifestNotFound(_)));
    }
}
