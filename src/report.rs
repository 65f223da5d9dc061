use std::fmt::Write;

use crate::format::truncate_unicode;
use crate::system::snapshot::Snapshot;

const RULE: &str = "------------------------------------------------------";
const NAME_WIDTH: usize = 32;

/// Plain-text rendering of a snapshot, used by `--once`.
/// `max_rows == 0` prints every process.
pub fn render_text(snapshot: &Snapshot, max_rows: usize) -> String {
    let mut out = String::new();
    let memory = &snapshot.memory;

    let _ = writeln!(out, "=================== SYSTEM MONITOR ===================");
    let _ = writeln!(out, "CPU Usage: {:.1}%", snapshot.cpu_usage_percent);
    let _ = writeln!(
        out,
        "Memory: {} MB / {} MB",
        memory.used_mb(),
        memory.total_mb
    );
    let _ = writeln!(
        out,
        "Processes: {}  Sort: {}",
        snapshot.processes.len(),
        snapshot.sort_mode.label()
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<8}{:<14}Name", "PID", "Memory(KB)");
    let _ = writeln!(out, "{RULE}");

    let shown = visible_rows(snapshot.processes.len(), max_rows);
    for p in &snapshot.processes[..shown] {
        let row = format!(
            "{:<8}{:<14}{}",
            p.pid,
            p.memory_kb,
            truncate_unicode(&p.name, NAME_WIDTH)
        );
        let _ = writeln!(out, "{}", row.trim_end());
    }
    let hidden = snapshot.processes.len() - shown;
    if hidden > 0 {
        let _ = writeln!(out, "... {hidden} more");
    }
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn render_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

pub fn visible_rows(total: usize, max_rows: usize) -> usize {
    if max_rows == 0 {
        total
    } else {
        total.min(max_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::memory::MemorySample;
    use crate::system::process::ProcessRecord;
    use crate::system::snapshot::SortMode;

    fn snapshot() -> Snapshot {
        Snapshot {
            cpu_usage_percent: 42.25,
            memory: MemorySample {
                total_mb: 2000,
                available_mb: 500,
            },
            processes: vec![
                ProcessRecord {
                    pid: 10,
                    name: "alpha".into(),
                    memory_kb: 900,
                },
                ProcessRecord {
                    pid: 11,
                    name: String::new(),
                    memory_kb: 0,
                },
                ProcessRecord {
                    pid: 12,
                    name: "gamma".into(),
                    memory_kb: 10,
                },
            ],
            sort_mode: SortMode::None,
        }
    }

    #[test]
    fn caps_rows_and_counts_the_rest() {
        let text = render_text(&snapshot(), 1);
        assert!(text.contains("10      900           alpha"));
        assert!(!text.contains("gamma"));
        assert!(text.contains("... 2 more"));
    }

    #[test]
    fn empty_name_leaves_no_trailing_space() {
        let text = render_text(&snapshot(), 0);
        assert!(text.lines().any(|l| l == "11      0"));
        assert!(text.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn json_carries_all_fields() {
        let json = render_json(&snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["memory"]["total_mb"], 2000);
        assert_eq!(value["sort_mode"], "none");
        assert_eq!(value["processes"][0]["name"], "alpha");
        assert_eq!(value["processes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn visible_rows_zero_means_all() {
        assert_eq!(visible_rows(300, 0), 300);
        assert_eq!(visible_rows(300, 120), 120);
        assert_eq!(visible_rows(5, 120), 5);
    }
}
