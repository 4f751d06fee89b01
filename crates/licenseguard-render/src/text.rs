use licenseguard_types::{DependencyEntry, LicenseReport, ids};

const HEADERS: [&str; 4] = ["Name", "Version", "License", "Allowed to Use?"];

/// Render the human-readable summary: root header lines followed by a borderless table.
///
/// Cells are left-aligned and padded to the widest cell of their column, each followed by
/// two spaces. Trailing whitespace is trimmed from every line.
pub fn render_text(report: &LicenseReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Name: {}\n", report.name));
    out.push_str(&format!("Version: {}\n", report.version));
    out.push_str(&format!("Licenses: {}\n", joined_or_none(&report.license)));
    out.push_str("Dependencies:\n\n");

    let mut rows: Vec<[String; 4]> = Vec::with_capacity(report.dependencies.len() + 1);
    rows.push(HEADERS.map(str::to_string));
    for (name, dep) in &report.dependencies {
        rows.push([
            name.clone(),
            dep.version.clone(),
            joined_or_none(&dep.license),
            allowed_cell(dep).to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    for row in &rows {
        let mut line = String::new();
        for (cell, w) in row.iter().zip(widths) {
            line.push_str(cell);
            line.extend(std::iter::repeat_n(' ', w - cell.chars().count() + 2));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn joined_or_none(licenses: &[String]) -> String {
    if licenses.is_empty() {
        ids::NO_LICENSE.to_string()
    } else {
        licenses.join(", ")
    }
}

fn allowed_cell(dep: &DependencyEntry) -> &'static str {
    match (dep.allowed_to_use, dep.whitelisted) {
        (true, _) => "yes",
        (false, true) => "no (whitelisted)",
        (false, false) => "no",
    }
}
