use crate::domain::models::CompatibilityReport;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

fn push_list<T: Display>(out: &mut String, items: impl IntoIterator<Item = T>) {
    for item in items {
        out.push_str(" - ");
        out.push_str(&item.to_string());
        out.push('\n');
    }
}

/// Renders the Markdown report. Everything is iterated in sorted order so
/// the same inputs always produce the same bytes.
pub fn render(project: &str, source_set: &str, report: &CompatibilityReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Project '{}' `{}`\n\n", project, source_set));

    out.push_str("## Current targets\n");
    push_list(&mut out, &report.current_targets);
    out.push_str("\n## Missing targets\n");
    push_list(&mut out, &report.missing_targets);
    out.push_str("\n## Unavailable targets\n");
    push_list(&mut out, &report.unavailable_targets);

    out.push_str("\n\n# Unsupported dependencies by target\n");
    if report.unsupported_by_target.is_empty() {
        out.push_str("\nNone!\n");
    } else {
        for (target, coordinates) in &report.unsupported_by_target {
            out.push_str(&format!("\n## `{}` missing\n", target));
            push_list(&mut out, coordinates);
        }
    }

    out.push_str("\n\n# Supported targets by dependency\n");
    if report.supported_by_dependency.is_empty() {
        out.push_str("\nNone!\n");
    } else {
        for (coordinate, targets) in &report.supported_by_dependency {
            out.push_str(&format!("\n## `{}`\n", coordinate));
            push_list(&mut out, targets);
        }
    }
    out
}

pub fn report_path(output_dir: &Path, source_set: &str) -> PathBuf {
    output_dir.join(format!("{}.md", source_set))
}

/// Writes `contents` to `path` through a temp file in the same directory so
/// readers never observe a partial report.
pub fn write_atomically(path: &Path, contents: &str) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
