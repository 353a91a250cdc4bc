//! pbxcheck core - Xcode project manifest consistency audit
//!
//! This crate provides read-only auditing of an Xcode `project.pbxproj`
//! manifest against the files actually present on disk, reporting "ghost"
//! references (listed in the project, missing from the directory tree).

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod audit;
pub mod check;
pub mod disk;
pub mod error;
pub mod filenames;
pub mod project;
pub mod report;
pub mod section;

pub use audit::{AuditConfig, AuditReport, Auditor, DEFAULT_PATH};
pub use check::{CheckEntry, CheckReport};
pub use error::{AuditError, AuditResult};
pub use filenames::{FileNameExtractor, FileNameSet, EXTENSION_WHITELIST};
pub use section::Section;
