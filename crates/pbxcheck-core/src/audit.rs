//! Main audit pipeline
//!
//! Linear, single-pass pipeline: locate the `.xcodeproj` bundle, read the
//! manifest, extract the referenced filename sets, walk the disk, and
//! cross-reference. Each run is stateless and produces fresh sets.

use crate::check::{self, CheckReport};
use crate::disk;
use crate::error::AuditResult;
use crate::filenames::{FileNameExtractor, FileNameSet};
use crate::project;
use crate::section::{section_text, Section};
use serde::Serialize;
use std::path::PathBuf;

/// Default project root when none is given
pub const DEFAULT_PATH: &str = ".";

/// Configuration for a single audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Directory containing the `.xcodeproj` bundle
    pub path: PathBuf,
    /// Filenames excluded from ghost detection
    pub exclude: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            exclude: Vec::new(),
        }
    }
}

/// Everything one audit run found
#[derive(Debug, Serialize)]
pub struct AuditReport {
    /// Path of the audited `.xcodeproj` bundle
    pub project: PathBuf,
    /// Filenames in the `PBXFileReference` section
    pub file_references: FileNameSet,
    /// Filenames in the `PBXBuildFile` section
    pub build_files: FileNameSet,
    /// Filenames in the `PBXSourcesBuildPhase` section
    pub sources_build_phase: FileNameSet,
    /// Filenames in the `PBXResourcesBuildPhase` section
    pub resources_build_phase: FileNameSet,
    /// Number of distinct filenames found on disk
    pub disk_file_count: usize,
    /// Ghost and non-target classification of the file references
    pub check: CheckReport,
}

/// The main auditor struct
#[derive(Debug, Default)]
pub struct Auditor;

impl Auditor {
    /// Create a new auditor
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run the full audit pipeline
    ///
    /// # Errors
    /// Returns an error if the bundle or manifest is missing, a section
    /// marker is absent, or the directory walk fails.
    pub fn run(&self, config: &AuditConfig) -> AuditResult<AuditReport> {
        let bundle = project::find_xcodeproj(&config.path)?;
        let manifest = project::read_manifest(&bundle)?;
        let extractor = FileNameExtractor::new();

        let file_references =
            extractor.referenced_file_names(section_text(&manifest, Section::FileReference)?);
        let build_files =
            extractor.referenced_file_names(section_text(&manifest, Section::BuildFile)?);
        let sources_build_phase =
            extractor.referenced_file_names(section_text(&manifest, Section::SourcesBuildPhase)?);
        let resources_build_phase =
            extractor.referenced_file_names(section_text(&manifest, Section::ResourcesBuildPhase)?);

        let disk_names = disk::disk_file_names(&config.path)?;

        // The build-file set doubles as the target set: a reference absent
        // from it is declared but attached to no build phase.
        let check =
            check::check_references(&file_references, &disk_names, &build_files, &config.exclude);

        Ok(AuditReport {
            project: bundle,
            file_references,
            build_files,
            sources_build_phase,
            resources_build_phase,
            disk_file_count: disk_names.len(),
            check,
        })
    }
}
