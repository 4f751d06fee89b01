use licenseguard_types::LicenseReport;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Render the structured report as pretty JSON with four-space indentation and a trailing
/// newline.
pub fn render_json(report: &LicenseReport) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    report.serialize(&mut ser)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
