use super::source::ProcFs;

/// Cumulative host tick counters at the most recent sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuCounters {
    pub total_ticks: u64,
    pub idle_ticks: u64,
}

/// Parses the aggregate line of `stat`: a tag followed by user, nice,
/// system and idle ticks. Trailing fields (iowait, irq, ...) are ignored.
pub fn parse_cpu_line(line: &str) -> Option<CpuCounters> {
    let mut fields = line.split_whitespace();
    fields.next()?;
    let mut ticks = [0u64; 4];
    for slot in &mut ticks {
        *slot = fields.next()?.parse().ok()?;
    }
    Some(CpuCounters {
        total_ticks: ticks.iter().fold(0u64, |acc, t| acc.saturating_add(*t)),
        idle_ticks: ticks[3],
    })
}

/// Busy share of the interval between two readings, in percent.
pub fn utilization(prev: CpuCounters, current: CpuCounters) -> f32 {
    let total_diff = current.total_ticks.saturating_sub(prev.total_ticks);
    if total_diff == 0 {
        return 0.0;
    }
    let idle_diff = current.idle_ticks.saturating_sub(prev.idle_ticks);
    let busy = total_diff.saturating_sub(idle_diff);
    ((busy as f64 * 100.0 / total_diff as f64) as f32).clamp(0.0, 100.0)
}

/// Reads the current counters, returns utilization since `baseline`, and
/// moves `baseline` forward. An unreadable or malformed source returns 0
/// and leaves the baseline untouched.
pub fn sample_cpu(source: &ProcFs, baseline: &mut CpuCounters) -> f32 {
    let current = source
        .stat()
        .and_then(|contents| contents.lines().next().and_then(parse_cpu_line));
    let Some(current) = current else {
        tracing::debug!("cpu counters unavailable");
        return 0.0;
    };
    let percent = utilization(*baseline, current);
    *baseline = current;
    percent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::source::fixture::FakeProc;

    fn counters(total: u64, idle: u64) -> CpuCounters {
        CpuCounters {
            total_ticks: total,
            idle_ticks: idle,
        }
    }

    #[test]
    fn parses_first_four_fields_only() {
        let c = parse_cpu_line("cpu  100 20 30 400 999 888 777 0 0 0").unwrap();
        assert_eq!(c, counters(550, 400));
    }

    #[test]
    fn short_or_garbled_line_is_rejected() {
        assert!(parse_cpu_line("cpu 1 2 3").is_none());
        assert!(parse_cpu_line("cpu 1 two 3 4").is_none());
        assert!(parse_cpu_line("").is_none());
    }

    #[test]
    fn delta_gives_expected_percentage() {
        let pct = utilization(counters(1000, 800), counters(1200, 850));
        assert!((pct - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_interval_is_zero() {
        assert_eq!(utilization(counters(500, 100), counters(500, 100)), 0.0);
    }

    #[test]
    fn fully_idle_interval_is_zero() {
        assert_eq!(utilization(counters(100, 50), counters(200, 150)), 0.0);
    }

    #[test]
    fn counter_reset_does_not_underflow() {
        assert_eq!(utilization(counters(5000, 4000), counters(100, 90)), 0.0);
    }

    #[test]
    fn sample_updates_baseline() {
        let fake = FakeProc::new("cpu");
        fake.write("stat", "cpu  600 100 100 200 5 0 0\ncpu0 1 1 1 1\n");
        let source = fake.source();

        let mut baseline = CpuCounters::default();
        sample_cpu(&source, &mut baseline);
        assert_eq!(baseline, counters(1000, 200));

        // Unchanged counters: zero interval right after seeding.
        assert_eq!(sample_cpu(&source, &mut baseline), 0.0);

        fake.write("stat", "cpu  700 100 150 250\n");
        let pct = sample_cpu(&source, &mut baseline);
        assert!((pct - 75.0).abs() < f32::EPSILON);
        assert_eq!(baseline, counters(1200, 250));
    }

    #[test]
    fn unreadable_source_keeps_baseline() {
        let mut baseline = counters(42, 7);
        let pct = sample_cpu(&ProcFs::new("/nonexistent/proctop/root"), &mut baseline);
        assert_eq!(pct, 0.0);
        assert_eq!(baseline, counters(42, 7));
    }
}
