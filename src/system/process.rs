use serde::Serialize;

use super::source::ProcFs;

/// procfs reports memory in pages; the monitor assumes 4 KiB pages.
pub const PAGE_SIZE_KB: u64 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Empty when `comm` could not be read.
    pub name: String,
    /// First `statm` field in KiB; 0 when it could not be read.
    pub memory_kb: u64,
}

/// True for procfs entries that name a process: non-empty, digits only.
pub fn is_pid_entry(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Lists every process visible under the procfs root, in directory order.
/// A process that exits mid-scan keeps its record with default fields.
pub fn enumerate_processes(source: &ProcFs) -> Vec<ProcessRecord> {
    let Some(names) = source.entry_names() else {
        tracing::warn!(root = %source.root().display(), "process directory unavailable");
        return Vec::new();
    };

    names
        .iter()
        .filter(|name| is_pid_entry(name))
        .filter_map(|name| name.parse::<u32>().ok().filter(|pid| *pid > 0))
        .map(|pid| read_process(source, pid))
        .collect()
}

pub fn read_process(source: &ProcFs, pid: u32) -> ProcessRecord {
    ProcessRecord {
        pid,
        name: read_name(source, pid).unwrap_or_default(),
        memory_kb: read_memory_kb(source, pid).unwrap_or(0),
    }
}

fn read_name(source: &ProcFs, pid: u32) -> Option<String> {
    let contents = source.process_file(pid, "comm")?;
    Some(contents.lines().next().unwrap_or_default().to_string())
}

fn read_memory_kb(source: &ProcFs, pid: u32) -> Option<u64> {
    let contents = source.process_file(pid, "statm")?;
    let pages: u64 = contents.split_whitespace().next()?.parse().ok()?;
    Some(pages.saturating_mul(PAGE_SIZE_KB))
}

/// Stable sort, largest `memory_kb` first; equal entries keep their order.
pub fn sort_by_memory_desc(records: &mut [ProcessRecord]) {
    records.sort_by(|a, b| b.memory_kb.cmp(&a.memory_kb));
}
