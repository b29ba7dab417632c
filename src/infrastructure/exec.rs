//! System command executor
//!
//! Runs external tools with `std::process::Command`, feeding optional stdin
//! and capturing both output streams.

use std::io::{ErrorKind, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

use crate::domain::ports::{CommandExecutor, CommandOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

/// Write all of `input`, then close the pipe so the child sees EOF.
/// A child that exits without draining stdin is not an error here; its
/// exit status tells the caller what happened.
fn feed_stdin(mut pipe: ChildStdin, input: &[u8]) -> std::io::Result<()> {
    match pipe.write_all(input) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> std::io::Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = cmd.spawn()?;
        let pipe = child.stdin.take();

        // feed stdin while output drains; either side may block on a full pipe
        let (fed, output) = thread::scope(|scope| {
            let writer = match (stdin, pipe) {
                (Some(input), Some(pipe)) => Some(scope.spawn(move || feed_stdin(pipe, input))),
                _ => None,
            };
            let output = child.wait_with_output();
            let fed = match writer {
                Some(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked"))),
                None => Ok(()),
            };
            (fed, output)
        });
        let output = output?;
        fed?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
