use crate::apply::RenameOutcome;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a run operation
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub folder: String,
    pub prefix: String,
    pub reserved: usize,
    pub pending: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub dry_run: bool,
    pub renames: Vec<RenameOutcome>,
}

/// Result of a version command
#[derive(Debug, Serialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RunResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "run",
            "folder": self.folder,
            "prefix": self.prefix,
            "dry_run": self.dry_run,
            "summary": {
                "reserved": self.reserved,
                "pending": self.pending,
                "succeeded": self.succeeded,
                "failed": self.failed,
            },
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "=== Rename results ===").unwrap();
        writeln!(output, "Reserved: {}", self.reserved).unwrap();
        writeln!(output, "Pending: {}", self.pending).unwrap();
        if self.dry_run {
            write!(output, "Dry run, nothing renamed").unwrap();
        } else {
            writeln!(output, "Renamed: {}", self.succeeded).unwrap();
            write!(output, "Failed: {}", self.failed).unwrap();
        }
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RunResult {
        RunResult {
            folder: "/data".to_string(),
            prefix: "Document".to_string(),
            reserved: 2,
            pending: 2,
            succeeded: 2,
            failed: 0,
            dry_run: false,
            renames: vec![RenameOutcome {
                old_name: "a.txt".to_string(),
                new_name: "Document_1.txt".to_string(),
                renamed: true,
                error: None,
            }],
        }
    }

    #[test]
    fn summary_reports_all_counts() {
        let summary = result().format_summary();
        assert!(summary.contains("Reserved: 2"));
        assert!(summary.contains("Pending: 2"));
        assert!(summary.contains("Renamed: 2"));
        assert!(summary.contains("Failed: 0"));
    }

    #[test]
    fn dry_run_summary_omits_rename_counts() {
        let mut r = result();
        r.dry_run = true;
        r.succeeded = 0;
        let summary = r.format_summary();
        assert!(summary.contains("Dry run"));
        assert!(!summary.contains("Renamed:"));
    }

    #[test]
    fn json_output_is_structured() {
        let json: serde_json::Value = serde_json::from_str(&result().format_json()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["operation"], "run");
        assert_eq!(json["summary"]["reserved"], 2);
        assert_eq!(json["renames"][0]["new_name"], "Document_1.txt");
        assert!(json["renames"][0].get("error").is_none());
    }

    #[test]
    fn version_formats() {
        let v = VersionResult {
            name: "renumber".to_string(),
            version: "0.1.0".to_string(),
        };
        assert_eq!(v.format_summary(), "renumber 0.1.0");
        assert_eq!(
            v.format_json(),
            r#"{"name":"renumber","version":"0.1.0"}"#
        );
    }
}
