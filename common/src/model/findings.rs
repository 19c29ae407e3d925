//! Security-risk findings emitted by the analysis pass.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label: &str = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(label)
    }
}

/// One risk observation, attributed to the resource it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Short category label, e.g. `"Open Security Group"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name of the affected resource, or a fleet-level label.
    pub resource: String,
    pub details: String,
    pub severity: Severity,
}

impl fmt::Display for Finding {
    /// Report line format: `[severity] kind: details (Resource: resource)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} (Resource: {})",
            self.severity, self.kind, self.details, self.resource
        )
    }
}
