//! Disk scanner
//!
//! Collects the base names of every regular file under a root directory.
//! Directory structure is discarded: two files with the same name in
//! different folders are indistinguishable in the resulting set.

use crate::error::AuditResult;
use crate::filenames::FileNameSet;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively collect the base names of all files under `root`
pub fn disk_file_names(root: &Path) -> AuditResult<FileNameSet> {
    let mut names = FileNameSet::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            names.insert(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_flat_names_recursively() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join("A.swift"), "").expect("write");
        let nested = dir.path().join("Sub");
        fs::create_dir(&nested).expect("mkdir");
        fs::write(nested.join("B.swift"), "").expect("write");

        let names = disk_file_names(dir.path()).expect("scan");
        assert!(names.contains("A.swift"));
        assert!(names.contains("B.swift"));
        assert!(!names.contains("Sub"));
    }

    #[test]
    fn same_name_in_two_folders_is_one_entry() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        for sub in ["One", "Two"] {
            let nested = dir.path().join(sub);
            fs::create_dir(&nested).expect("mkdir");
            fs::write(nested.join("Dup.m"), "").expect("write");
        }

        let names = disk_file_names(dir.path()).expect("scan");
        assert_eq!(names.iter().filter(|n| *n == "Dup.m").count(), 1);
    }
}
