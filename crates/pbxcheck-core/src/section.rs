//! Manifest section extraction
//!
//! A `project.pbxproj` manifest groups its entries into named sections
//! delimited by `/* Begin <Section> section */` and
//! `/* End <Section> section */` comments. This module slices out the text
//! strictly between those markers.

use crate::error::{AuditError, AuditResult};
use serde::Serialize;
use std::fmt;

/// A named section of the project manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    /// File references declared by the project
    FileReference,
    /// Files attached to build phases
    BuildFile,
    /// Files compiled during the sources build phase
    SourcesBuildPhase,
    /// Files copied during the resources build phase
    ResourcesBuildPhase,
    /// Native build targets
    NativeTarget,
}

impl Section {
    /// The section name as it appears in the manifest's marker comments
    #[must_use]
    pub fn marker_name(self) -> &'static str {
        match self {
            Section::FileReference => "PBXFileReference",
            Section::BuildFile => "PBXBuildFile",
            Section::SourcesBuildPhase => "PBXSourcesBuildPhase",
            Section::ResourcesBuildPhase => "PBXResourcesBuildPhase",
            Section::NativeTarget => "PBXNativeTarget",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker_name())
    }
}

/// Extract the text strictly between a section's begin and end markers
///
/// # Errors
/// Returns [`AuditError::SectionNotFound`] if either marker is absent.
pub fn section_text(manifest: &str, section: Section) -> AuditResult<&str> {
    let begin = format!("/* Begin {section} section */");
    let end = format!("/* End {section} section */");

    let start = manifest
        .find(&begin)
        .ok_or(AuditError::SectionNotFound(section))?
        + begin.len();
    let body = &manifest[start..];
    let stop = body
        .find(&end)
        .ok_or(AuditError::SectionNotFound(section))?;

    Ok(&body[..stop])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
header text
/* Begin PBXBuildFile section */
\t\tAA01 /* Main.m in Sources */ = {isa = PBXBuildFile; };
/* End PBXBuildFile section */
/* Begin PBXFileReference section */
\t\tAA02 /* Main.m */ = {isa = PBXFileReference; };
/* End PBXFileReference section */
trailer text
";

    #[test]
    fn extracts_between_markers() {
        let text = section_text(SAMPLE, Section::BuildFile).unwrap();
        assert!(text.contains("Main.m in Sources"));
        assert!(!text.contains("Main.m */ = {isa = PBXFileReference"));
    }

    #[test]
    fn extracted_text_excludes_markers() {
        for section in [Section::BuildFile, Section::FileReference] {
            let text = section_text(SAMPLE, section).unwrap();
            assert!(!text.contains("/* Begin"));
            assert!(!text.contains("/* End"));
        }
    }

    #[test]
    fn missing_section_is_explicit_error() {
        let err = section_text(SAMPLE, Section::NativeTarget).unwrap_err();
        assert!(matches!(
            err,
            AuditError::SectionNotFound(Section::NativeTarget)
        ));
    }

    #[test]
    fn empty_manifest_is_explicit_error() {
        let err = section_text("", Section::FileReference).unwrap_err();
        assert!(matches!(err, AuditError::SectionNotFound(_)));
    }

    #[test]
    fn missing_end_marker_is_explicit_error() {
        let truncated = "/* Begin PBXBuildFile section */\nno end here";
        let err = section_text(truncated, Section::BuildFile).unwrap_err();
        assert!(matches!(err, AuditError::SectionNotFound(Section::BuildFile)));
    }
}
