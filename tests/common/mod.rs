#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use proctop::system::source::ProcFs;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A procfs lookalike in the temp dir, removed on drop.
pub struct FakeProc {
    pub root: PathBuf,
}

impl FakeProc {
    pub fn new(label: &str) -> Self {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "proctop_it_{label}_{}_{n}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).expect("create fake proc root");
        FakeProc { root }
    }

    pub fn source(&self) -> ProcFs {
        ProcFs::new(&self.root)
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, contents).expect("write fixture file");
    }

    pub fn add_process(&self, pid: u32, comm: &str, pages: u64) {
        self.write(&format!("{pid}/comm"), &format!("{comm}\n"));
        self.write(&format!("{pid}/statm"), &format!("{pages} 0 0 0 0 0 0\n"));
    }

    pub fn remove_process(&self, pid: u32) {
        let _ = fs::remove_dir_all(self.root.join(pid.to_string()));
    }

    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.root.join(rel)).expect("create dir");
    }
}

impl Drop for FakeProc {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
