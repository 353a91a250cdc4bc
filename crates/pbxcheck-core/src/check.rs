//! Consistency check
//!
//! Classifies each referenced filename against the disk set (present or
//! ghost) and the target set (attached to a build phase or not).

use crate::filenames::FileNameSet;
use serde::Serialize;

/// A single reference classified against the disk set
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// The referenced filename
    pub name: String,
    /// Whether a file with this name exists anywhere under the project root
    pub on_disk: bool,
}

/// Result of cross-referencing the manifest against the disk
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Every checked reference, sorted by name
    pub entries: Vec<CheckEntry>,
    /// References with no matching file on disk
    pub ghosts: FileNameSet,
    /// References not present in the target (build file) set
    pub non_target: FileNameSet,
}

/// Check every reference name against the disk and target sets
///
/// Names listed in `exclude` are dropped from the reference set before
/// checking. Membership is exact, case-sensitive string equality.
#[must_use]
pub fn check_references(
    references: &FileNameSet,
    disk: &FileNameSet,
    targets: &FileNameSet,
    exclude: &[String],
) -> CheckReport {
    let mut report = CheckReport::default();

    for name in references {
        if exclude.iter().any(|excluded| excluded == name) {
            continue;
        }

        let on_disk = disk.contains(name);
        if !on_disk {
            report.ghosts.insert(name.clone());
        }
        if !targets.contains(name) {
            report.non_target.insert(name.clone());
        }
        report.entries.push(CheckEntry {
            name: name.clone(),
            on_disk,
        });
    }

    report
}
