mod common;

use common::FakeProc;
use insta::assert_snapshot;
use proctop::report::render_text;
use proctop::system::collector::{Collector, build_snapshot};
use proctop::system::cpu::CpuCounters;
use proctop::system::snapshot::SortMode;

fn fake_host() -> FakeProc {
    let fake = FakeProc::new("snapshot");
    fake.write(
        "meminfo",
        "MemTotal:        8192000 kB\nMemFree:          100000 kB\nMemAvailable:    2048000 kB\n",
    );
    fake.write("stat", "cpu  100 0 100 800 7 0 3 0 0 0\ncpu0 50 0 50 400\n");
    fake.add_process(1, "init", 300);
    fake.add_process(220, "postgres", 5000);
    fake.add_process(31, "sshd", 150);
    // Exited between listing and detail reads.
    fake.mkdir("4");
    fake.mkdir("self");
    fake.mkdir("net");
    fake.write("uptime", "12.0 4.0\n");
    fake
}

#[test]
fn report_text_from_fixture_host() {
    let fake = fake_host();
    let mut collector = Collector::new(fake.source());
    fake.write("stat", "cpu  250 0 150 900\n");

    let snapshot = collector.refresh(SortMode::Memory);
    let text = render_text(&snapshot, 0);

    assert_snapshot!("report_text", text);
}

#[test]
fn snapshot_invariants_hold() {
    let fake = fake_host();
    let mut baseline = CpuCounters::default();
    let snapshot = build_snapshot(&fake.source(), SortMode::None, &mut baseline);

    let mut pids: Vec<u32> = snapshot.processes.iter().map(|p| p.pid).collect();
    pids.sort_unstable();
    assert_eq!(pids, vec![1, 4, 31, 220]);

    let gone = snapshot.processes.iter().find(|p| p.pid == 4).unwrap();
    assert_eq!(gone.name, "");
    assert_eq!(gone.memory_kb, 0);

    assert_eq!(snapshot.memory.total_mb, 8000);
    assert_eq!(snapshot.memory.available_mb, 2000);
    assert!((0.0..=100.0).contains(&snapshot.cpu_usage_percent));
}

#[test]
fn consecutive_refreshes_are_independent() {
    let fake = fake_host();
    let mut collector = Collector::new(fake.source());

    let first = collector.refresh(SortMode::Memory);
    fake.remove_process(31);
    fake.add_process(77, "cron", 10);
    let second = collector.refresh(SortMode::Memory);

    assert!(first.processes.iter().any(|p| p.pid == 31));
    assert!(!first.processes.iter().any(|p| p.pid == 77));
    assert!(!second.processes.iter().any(|p| p.pid == 31));
    assert!(second.processes.iter().any(|p| p.pid == 77));
    assert_eq!(first.memory, second.memory);
    assert_eq!(second.cpu_usage_percent, 0.0);
}

#[test]
fn unchanged_host_gives_equal_snapshots() {
    let fake = fake_host();
    let mut collector = Collector::new(fake.source());
    let a = collector.refresh(SortMode::Memory);
    let b = collector.refresh(SortMode::Memory);
    assert_eq!(a, b);
}
