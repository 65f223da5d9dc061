use serde::Serialize;

use super::source::ProcFs;

const MEM_TOTAL_LABEL: &str = "MemTotal:";
const MEM_AVAILABLE_LABEL: &str = "MemAvailable:";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemorySample {
    pub total_mb: u64,
    pub available_mb: u64,
}

impl MemorySample {
    pub fn used_mb(&self) -> u64 {
        self.total_mb.saturating_sub(self.available_mb)
    }

    /// Used fraction of total memory in [0, 1].
    pub fn used_ratio(&self) -> f64 {
        if self.total_mb == 0 {
            return 0.0;
        }
        (self.used_mb() as f64 / self.total_mb as f64).clamp(0.0, 1.0)
    }
}

/// Parses `meminfo` text. Values are KiB and come out as MiB; an absent
/// label leaves its field at 0.
pub fn parse_meminfo(contents: &str) -> MemorySample {
    let mut sample = MemorySample::default();
    for line in contents.lines() {
        let mut fields = line.split_whitespace();
        let (Some(label), Some(value)) = (fields.next(), fields.next()) else {
            continue;
        };
        let Ok(kib) = value.parse::<u64>() else {
            continue;
        };
        match label {
            MEM_TOTAL_LABEL => sample.total_mb = kib / 1024,
            MEM_AVAILABLE_LABEL => sample.available_mb = kib / 1024,
            _ => {}
        }
    }
    sample
}

pub fn sample_memory(source: &ProcFs) -> MemorySample {
    match source.meminfo() {
        Some(contents) => parse_meminfo(&contents),
        None => MemorySample::default(),
    }
}
