//! Plain-text report formatter
//!
//! Renders each named filename set under a dashed header, then the
//! consistency check with `[ OK ]` / `[    ]` rows and the ghost and
//! non-target summaries.

use crate::audit::AuditReport;
use crate::filenames::FileNameSet;
use std::fmt::Write;

const RULE: &str = "---------------------------------------------------------------";

/// Render an audit report as plain text
#[must_use]
pub fn render(report: &AuditReport) -> String {
    let mut out = String::new();

    push_listing(&mut out, "PBXFileReference", &report.file_references);
    push_listing(&mut out, "PBXBuildFile", &report.build_files);
    push_listing(&mut out, "PBXSourcesBuildPhase", &report.sources_build_phase);
    push_listing(
        &mut out,
        "PBXResourcesBuildPhase",
        &report.resources_build_phase,
    );

    push_header(
        &mut out,
        &format!("Reference Files ({} files)", report.check.entries.len()),
    );
    for entry in &report.check.entries {
        let mark = if entry.on_disk { "[ OK ]" } else { "[    ]" };
        let _ = writeln!(out, "{mark} {}", entry.name);
    }

    push_name_set(
        &mut out,
        &format!("Ghost Files ({} files)", report.check.ghosts.len()),
        &report.check.ghosts,
    );
    push_name_set(
        &mut out,
        &format!("Non-Target Files ({} files)", report.check.non_target.len()),
        &report.check.non_target,
    );

    out
}

fn push_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{RULE}");
}

fn push_listing(out: &mut String, section_name: &str, names: &FileNameSet) {
    push_header(out, &format!("{section_name} ({} files)", names.len()));
    for name in names {
        let _ = writeln!(out, "{name}");
    }
}

fn push_name_set(out: &mut String, title: &str, names: &FileNameSet) {
    push_header(out, title);
    if names.is_empty() {
        let _ = writeln!(out, "No Files");
    }
    for name in names {
        let _ = writeln!(out, "{name}");
    }
}
