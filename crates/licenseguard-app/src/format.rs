use licenseguard_types::{LicenseReport, ids};
use std::fmt;
use std::str::FromStr;

/// Output format of the license report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported format \"{0}\". See help for supported formats.")]
pub struct UnsupportedFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::FORMAT_TEXT => Ok(ReportFormat::Text),
            ids::FORMAT_JSON => Ok(ReportFormat::Json),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Text => ids::FORMAT_TEXT,
            ReportFormat::Json => ids::FORMAT_JSON,
        })
    }
}

impl ReportFormat {
    /// Whether `report` counts as a violation for this format.
    ///
    /// The text summary tolerates excepted packages; the structured output counts every
    /// disallowed package.
    pub fn is_violation(self, report: &LicenseReport) -> bool {
        match self {
            ReportFormat::Text => report.has_unresolved_violation(),
            ReportFormat::Json => report.has_disallowed(),
        }
    }
}
