use crate::allocate::RenameEntry;
use crate::apply::RenameOutcome;
use crate::classify::Classification;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the classification and planned renames in the specified format.
pub fn render_plan(
    classification: &Classification,
    entries: &[RenameEntry],
    format: Preview,
    use_color: Option<bool>,
) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(classification, entries, use_color),
        Preview::Summary => render_summary(classification, entries),
        Preview::None => String::new(),
    }
}

/// Table of every eligible file: reserved rows keep their name, pending rows
/// show the target they will receive.
fn render_table(
    classification: &Classification,
    entries: &[RenameEntry],
    use_color: bool,
) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("File").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["File", "Status", "New name"]);
    }

    for entry in &classification.reserved {
        if use_color {
            table.add_row(vec![
                Cell::new(&entry.name),
                Cell::new("keep").fg(Color::Green),
                Cell::new(""),
            ]);
        } else {
            table.add_row(vec![entry.name.as_str(), "keep", ""]);
        }
    }

    // Allocation preserves pending order, so entries line up with pending.
    for entry in entries {
        if use_color {
            table.add_row(vec![
                Cell::new(&entry.old_name),
                Cell::new("rename").fg(Color::Yellow),
                Cell::new(&entry.new_name),
            ]);
        } else {
            table.add_row(vec![
                entry.old_name.as_str(),
                "rename",
                entry.new_name.as_str(),
            ]);
        }
    }

    table.to_string()
}

/// Plain-text listing of the classification, one file per line.
fn render_summary(classification: &Classification, entries: &[RenameEntry]) -> String {
    let mut output = String::new();

    writeln!(output, "[RENAME PLAN]").unwrap();
    writeln!(output, "Reserved: {}", classification.reserved.len()).unwrap();
    writeln!(output, "Pending: {}", classification.pending.len()).unwrap();
    writeln!(output).unwrap();

    if !classification.reserved.is_empty() {
        writeln!(output, "[RESERVED]").unwrap();
        for entry in &classification.reserved {
            writeln!(output, "{}", entry.name).unwrap();
        }
        writeln!(output).unwrap();
    }

    if !entries.is_empty() {
        writeln!(output, "[PENDING]").unwrap();
        for entry in entries {
            writeln!(output, "{} -> {}", entry.old_name, entry.new_name).unwrap();
        }
    }

    output
}

/// One per-file line for the execution phase.
pub fn format_outcome_line(outcome: &RenameOutcome, use_color: bool) -> String {
    if outcome.renamed {
        let mark = if use_color {
            AnsiColor::Green.paint("ok").to_string()
        } else {
            "ok".to_string()
        };
        format!("{}: {} -> {}", mark, outcome.old_name, outcome.new_name)
    } else {
        let mark = if use_color {
            AnsiColor::Red.paint("failed").to_string()
        } else {
            "failed".to_string()
        };
        format!(
            "{}: {} -> {} ({})",
            mark,
            outcome.old_name,
            outcome.new_name,
            outcome.error.as_deref().unwrap_or("unknown error")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify_files, MatchMode, NamePattern};
    use std::collections::BTreeSet;
    use std::path::Path;
    use std::str::FromStr;

    fn fixture() -> (Classification, Vec<RenameEntry>) {
        let pattern =
            NamePattern::new("Document", crate::DEFAULT_INDEX_PATTERN, MatchMode::Loose).unwrap();
        let files: Vec<String> = ["Document_0.txt", "Document_2.txt", "a.txt", "notes.txt"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let classification = classify_files(&files, &pattern);
        let used: BTreeSet<u64> = crate::allocate::used_indices(&classification);
        let entries = crate::allocate::allocate_indices(
            Path::new("/data"),
            &pattern,
            &classification.pending,
            &used,
        );
        (classification, entries)
    }

    #[test]
    fn preview_from_str() {
        assert_eq!(Preview::from_str("table").unwrap(), Preview::Table);
        assert_eq!(Preview::from_str("SUMMARY").unwrap(), Preview::Summary);
        assert_eq!(Preview::from_str("none").unwrap(), Preview::None);
        assert!(Preview::from_str("diff").is_err());
    }

    #[test]
    fn explicit_color_preference_wins() {
        assert!(should_use_color_with_detector(Some(true), || false));
        assert!(!should_use_color_with_detector(Some(false), || true));
        assert!(should_use_color_with_detector(None, || true));
    }

    #[test]
    fn summary_lists_reserved_and_planned_targets() {
        let (classification, entries) = fixture();
        let output = render_plan(&classification, &entries, Preview::Summary, Some(false));

        assert!(output.contains("Reserved: 2"));
        assert!(output.contains("Pending: 2"));
        assert!(output.contains("Document_0.txt"));
        assert!(output.contains("a.txt -> Document_1.txt"));
        assert!(output.contains("notes.txt -> Document_3.txt"));
    }

    #[test]
    fn table_contains_every_file() {
        let (classification, entries) = fixture();
        let output = render_plan(&classification, &entries, Preview::Table, Some(false));

        for name in ["Document_0.txt", "Document_2.txt", "a.txt", "notes.txt"] {
            assert!(output.contains(name), "missing {name} in table output");
        }
        assert!(output.contains("keep"));
        assert!(output.contains("rename"));
    }

    #[test]
    fn none_preview_is_empty() {
        let (classification, entries) = fixture();
        assert!(render_plan(&classification, &entries, Preview::None, Some(false)).is_empty());
    }

    #[test]
    fn outcome_lines_carry_the_error_text() {
        let ok = RenameOutcome {
            old_name: "a.txt".to_string(),
            new_name: "file_0.txt".to_string(),
            renamed: true,
            error: None,
        };
        let failed = RenameOutcome {
            old_name: "b.txt".to_string(),
            new_name: "file_1.txt".to_string(),
            renamed: false,
            error: Some("permission denied".to_string()),
        };

        assert_eq!(format_outcome_line(&ok, false), "ok: a.txt -> file_0.txt");
        assert_eq!(
            format_outcome_line(&failed, false),
            "failed: b.txt -> file_1.txt (permission denied)"
        );
    }
}
