use super::cpu::{CpuCounters, sample_cpu};
use super::memory::sample_memory;
use super::process::{enumerate_processes, sort_by_memory_desc};
use super::snapshot::{SortMode, Snapshot};
use super::source::ProcFs;

/// Owns the procfs handle and the CPU baseline carried between refreshes.
pub struct Collector {
    source: ProcFs,
    cpu_baseline: CpuCounters,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(ProcFs::default())
    }
}

impl Collector {
    /// Seeds the CPU baseline so the first refresh reports a real interval
    /// rather than the whole uptime.
    pub fn new(source: ProcFs) -> Self {
        let mut cpu_baseline = CpuCounters::default();
        sample_cpu(&source, &mut cpu_baseline);
        Collector {
            source,
            cpu_baseline,
        }
    }

    pub fn source(&self) -> &ProcFs {
        &self.source
    }

    pub fn cpu_baseline(&self) -> CpuCounters {
        self.cpu_baseline
    }

    pub fn refresh(&mut self, sort_mode: SortMode) -> Snapshot {
        let _refresh_span =
            tracing::debug_span!("collector.refresh", sort = sort_mode.label()).entered();
        build_snapshot(&self.source, sort_mode, &mut self.cpu_baseline)
    }
}

/// Samples memory, then CPU, then processes. The three readings are taken
/// one after another and are not atomic with respect to each other.
pub fn build_snapshot(
    source: &ProcFs,
    sort_mode: SortMode,
    cpu_baseline: &mut CpuCounters,
) -> Snapshot {
    let _snapshot_span = tracing::debug_span!("collector.build_snapshot").entered();

    let memory = sample_memory(source);
    let cpu_usage_percent = sample_cpu(source, cpu_baseline);
    let mut processes = enumerate_processes(source);

    if sort_mode == SortMode::Memory {
        sort_by_memory_desc(&mut processes);
    }

    tracing::debug!(
        cpu = cpu_usage_percent,
        memory_used_mb = memory.used_mb(),
        processes = processes.len(),
        "snapshot built"
    );

    Snapshot {
        cpu_usage_percent,
        memory,
        processes,
        sort_mode,
    }
}
