//! JSON report formatter

use crate::audit::AuditReport;
use crate::error::AuditResult;

/// Convert an audit report to a pretty-printed JSON string
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(report: &AuditReport) -> AuditResult<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
