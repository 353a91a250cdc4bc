//! Error types for the pbxcheck audit

use crate::section::Section;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for audit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Errors that can occur during an audit
#[derive(Error, Debug)]
pub enum AuditError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No `.xcodeproj` bundle under the given directory
    #[error("no .xcodeproj directory found in {}", .0.display())]
    XcodeprojNotFound(PathBuf),

    /// The bundle exists but `project.pbxproj` is missing
    #[error("project manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// A section's begin or end marker is absent from the manifest
    #[error("section not found in manifest: {0}")]
    SectionNotFound(Section),

    /// Directory walk failed
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to serialize the report
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
