// External command execution with a deadline

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{HwsnapError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs a program and returns its trimmed stdout.
pub trait CommandRunner: Send + Sync {
    /// `timeout` of `None` means the runner's default deadline.
    fn run(&self, program: &str, args: &[&str], timeout: Option<Duration>) -> Result<String>;
}

/// [`CommandRunner`] backed by `std::process`.
///
/// The child is killed once its deadline passes.
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    default_timeout: Duration,
}

impl SystemCommandRunner {
    pub fn new(default_timeout: Duration) -> Self {
        Self { default_timeout }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Option<Duration>) -> Result<String> {
        let timeout = timeout.unwrap_or(self.default_timeout);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| HwsnapError::command_failed(program, e.to_string()))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| HwsnapError::command_failed(program, "stdout not captured"))?;

        // The child blocks once the pipe buffer fills, so read while polling.
        let reader = thread::spawn(move || {
            let mut buf = String::new();
            stdout.read_to_string(&mut buf).map(|_| buf)
        });

        let start = Instant::now();
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None if start.elapsed() >= timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    log::debug!("{} killed after {:?}", program, timeout);
                    return Err(HwsnapError::CommandTimeout {
                        program: program.to_string(),
                        timeout_ms: timeout.as_millis() as u64,
                    });
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        let output = reader
            .join()
            .map_err(|_| HwsnapError::command_failed(program, "output reader panicked"))??;

        if !status.success() {
            return Err(HwsnapError::command_failed(program, status.to_string()));
        }

        Ok(output.trim().to_string())
    }
}

/// Whether `program` resolves on `PATH`.
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
