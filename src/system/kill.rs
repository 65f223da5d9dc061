use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to kill PID {pid}: {cause}")]
pub struct TerminationError {
    pub pid: i32,
    pub cause: String,
}

/// Sends SIGKILL to `pid`.
///
/// Zero and negative ids address process groups (or every process) under
/// kill(2), so they are refused before any signal is sent.
pub fn terminate_process(pid: i32) -> Result<(), TerminationError> {
    if pid <= 0 {
        return Err(TerminationError {
            pid,
            cause: "invalid process identifier".to_string(),
        });
    }

    kill(Pid::from_raw(pid), Signal::SIGKILL).map_err(|errno| TerminationError {
        pid,
        cause: errno.desc().to_string(),
    })
}
