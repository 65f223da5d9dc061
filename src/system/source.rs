use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Handle on a procfs mount. Every host read in the crate goes through here,
/// so tests can point it at a fixture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProcFs { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meminfo(&self) -> Option<String> {
        read_text(&self.root.join("meminfo"))
    }

    pub fn stat(&self) -> Option<String> {
        read_text(&self.root.join("stat"))
    }

    /// Names of all entries under the root, in directory order.
    /// `None` when the root itself cannot be listed.
    pub fn entry_names(&self) -> Option<Vec<String>> {
        let entries = fs::read_dir(&self.root).ok()?;
        let names = entries
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        Some(names)
    }

    /// Reads `<root>/<pid>/<file>`.
    pub fn process_file(&self, pid: u32, file: &str) -> Option<String> {
        read_text(&self.root.join(pid.to_string()).join(file))
    }
}

fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "procfs read failed");
            None
        }
    }
}
