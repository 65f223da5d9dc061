use serde::Serialize;

use super::memory::MemorySample;
use super::process::ProcessRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Enumeration order.
    #[default]
    None,
    /// Largest resident memory first.
    Memory,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "None",
            SortMode::Memory => "Memory",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" | "m" => SortMode::Memory,
            _ => SortMode::None,
        }
    }
}

/// The system at one refresh. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub cpu_usage_percent: f32,
    pub memory: MemorySample,
    pub processes: Vec<ProcessRecord>,
    pub sort_mode: SortMode,
}

impl Snapshot {
    pub fn empty() -> Self {
        Snapshot {
            cpu_usage_percent: 0.0,
            memory: MemorySample::default(),
            processes: Vec::new(),
            sort_mode: SortMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_from_config() {
        assert_eq!(SortMode::from_str_config("memory"), SortMode::Memory);
        assert_eq!(SortMode::from_str_config("MEM"), SortMode::Memory);
        assert_eq!(SortMode::from_str_config("none"), SortMode::None);
        assert_eq!(SortMode::from_str_config("bogus"), SortMode::None);
    }
}
