//! Scoped solver subprocess with a hard deadline.
//!
//! Spawn, drain both pipes on reader threads, poll for exit against the
//! deadline, and kill-and-reap on expiry. All exit paths release the
//! child and its pipes; a hung solver is never leaked.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::errors::SolverError;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Captured output of one finished solver process.
#[derive(Debug)]
pub struct SolverRun {
    pub stdout: String,
    pub stderr: String,
}

/// Run the solver once over `[encoding, instance]` under `timeout`.
///
/// Flags suppress warnings and select structured JSON output. On
/// deadline expiry the child is killed and reaped and
/// `SolverError::Timeout` is returned; there is no partial-result
/// salvage from a killed process.
pub fn run_with_deadline(
    solver_bin: &str,
    encoding: &Path,
    instance: &Path,
    timeout: Duration,
) -> Result<SolverRun, SolverError> {
    let mut child = Command::new(solver_bin)
        .arg("--warn=none")
        .arg("--outf=2")
        .arg(encoding)
        .arg(instance)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Drain both pipes off-thread so a chatty child can never block on
    // a full pipe buffer while we poll for exit.
    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait()? {
            Some(_status) => break,
            None if Instant::now() >= deadline => {
                child.kill().ok();
                child.wait().ok();
                // A descendant of the killed solver may have inherited
                // the pipe write ends and keep them open past the kill,
                // so joining the readers here could stall for the
                // orphan's lifetime. A timeout result never uses the
                // captured output; drop the handles and return at once.
                drop(stdout_reader);
                drop(stderr_reader);
                return Err(SolverError::Timeout);
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    }

    Ok(SolverRun {
        stdout: join_reader(stdout_reader),
        stderr: join_reader(stderr_reader),
    })
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<thread::JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = String::new();
            pipe.read_to_string(&mut buf).ok();
            buf
        })
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
