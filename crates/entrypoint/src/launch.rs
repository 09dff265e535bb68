//! Hand-off to the server process.
//!
//! On Unix the entrypoint `exec`s the server: the PID, standard streams, and
//! signal disposition pass straight to nginx, so the container runtime sees one
//! continuous process. Other targets cannot replace a process image and are
//! not supported: launching there fails with [`io::ErrorKind::Unsupported`].

use std::{fmt, io};

use common::EntrypointError;
use tracing::info;

/// Program and arguments used to start the server. argv[0] is always
/// `program`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ServerCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for ServerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Replaces the running process with another program.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessImage {
    /// Replace the current process with `command`.
    ///
    /// Only returns if the replacement failed.
    fn replace(&self, command: &ServerCommand) -> io::Error;
}

/// [`ProcessImage`] backed by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exec;

impl ProcessImage for Exec {
    #[cfg(unix)]
    fn replace(&self, command: &ServerCommand) -> io::Error {
        use std::{os::unix::process::CommandExt, process::Command};

        Command::new(&command.program).args(&command.args).exec()
    }

    #[cfg(not(unix))]
    fn replace(&self, _command: &ServerCommand) -> io::Error {
        io::Error::new(
            io::ErrorKind::Unsupported,
            "replacing the process image requires a Unix target",
        )
    }
}

/// Transfer control to the server. This is the last action of the entrypoint.
///
/// Returns only on failure, as [`EntrypointError::LaunchFailure`].
pub fn launch_server(image: &impl ProcessImage, command: &ServerCommand) -> EntrypointError {
    info!(command = %command, "starting server");
    let source = image.replace(command);
    EntrypointError::LaunchFailure {
        command: command.to_string(),
        source,
    }
}
