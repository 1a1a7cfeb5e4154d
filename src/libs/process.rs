//! # External Process Execution
//!
//! Every package manager, container runtime and OS installer is driven through the
//! [`CommandRunner`] trait. Drivers, the platform probe and installed-state checks
//! never touch `std::process` directly, which keeps them testable with a scripted
//! runner.
//!
//! Three execution shapes exist:
//! - **stream**: stdout/stderr inherited, so the user watches the package manager live
//! - **capture**: output collected for post-processing (mount points, container IDs)
//! - **pipe**: producer stdout feeds consumer stdin (`curl … | sh`)
//!
//! The system runner also injects the proxy and mirror variables derived from the
//! user configuration into every child process.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::log_debug;

/// A single program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: &str) -> Self {
        CommandSpec {
            program: program.to_string(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    fn to_command(&self, env: &[(String, String)]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        for (key, value) in env {
            command.env(key, value);
        }
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Exit information of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    pub success: bool,
    pub code: Option<i32>,
}

#[cfg(test)]
impl ProcessStatus {
    pub const OK: ProcessStatus = ProcessStatus {
        success: true,
        code: Some(0),
    };

    pub fn failed(code: i32) -> Self {
        ProcessStatus {
            success: false,
            code: Some(code),
        }
    }
}

impl From<std::process::ExitStatus> for ProcessStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        ProcessStatus {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Output of a captured process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: ProcessStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success
    }

    /// stdout followed by stderr, for diagnostics and substring checks.
    pub fn combined(&self) -> String {
        match (self.stdout.trim().is_empty(), self.stderr.trim().is_empty()) {
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr.trim_end()),
            (false, true) => self.stdout.trim_end().to_string(),
            (true, _) => self.stderr.trim_end().to_string(),
        }
    }
}

/// Execution seam for external programs.
pub trait CommandRunner {
    /// Runs with inherited stdio and waits for completion.
    fn stream(&self, cmd: &CommandSpec) -> io::Result<ProcessStatus>;
    /// Runs with captured stdio and waits for completion.
    fn capture(&self, cmd: &CommandSpec) -> io::Result<CapturedOutput>;
    /// Runs `producer | consumer`; the status is the consumer's unless the producer failed.
    fn pipe(&self, producer: &CommandSpec, consumer: &CommandSpec) -> io::Result<ProcessStatus>;
    /// Whether `program` resolves through the executable search path.
    fn on_path(&self, program: &str) -> bool;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone)]
pub struct SystemRunner {
    env: Vec<(String, String)>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables exported into every child process.
    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.env = env;
        self
    }
}

impl CommandRunner for SystemRunner {
    fn stream(&self, cmd: &CommandSpec) -> io::Result<ProcessStatus> {
        tracing::debug!(program = %cmd.program, args = ?cmd.args, cwd = ?cmd.cwd, "stream");
        let status = cmd
            .to_command(&self.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        log_debug!("[Process] `{}` exited with {:?}", cmd, status.code());
        Ok(status.into())
    }

    fn capture(&self, cmd: &CommandSpec) -> io::Result<CapturedOutput> {
        tracing::debug!(program = %cmd.program, args = ?cmd.args, cwd = ?cmd.cwd, "capture");
        let output = cmd
            .to_command(&self.env)
            .stdin(Stdio::null())
            .output()?;
        log_debug!("[Process] `{}` exited with {:?}", cmd, output.status.code());
        Ok(CapturedOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn pipe(&self, producer: &CommandSpec, consumer: &CommandSpec) -> io::Result<ProcessStatus> {
        tracing::debug!(producer = %producer, consumer = %consumer, "pipe");
        let mut upstream = producer
            .to_command(&self.env)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;
        let downstream = upstream
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("producer stdout was not captured"))
            .and_then(|upstream_out| {
                consumer
                    .to_command(&self.env)
                    .stdin(Stdio::from(upstream_out))
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
            });
        let downstream_status = match downstream {
            Ok(status) => status,
            Err(e) => {
                // Nothing reads the producer any more; reap it before bailing out.
                let _ = upstream.kill();
                let _ = upstream.wait();
                return Err(e);
            }
        };
        let upstream_status = upstream.wait()?;
        log_debug!(
            "[Process] `{} | {}` exited with {:?} / {:?}",
            producer,
            consumer,
            upstream_status.code(),
            downstream_status.code()
        );
        if !upstream_status.success() {
            return Ok(upstream_status.into());
        }
        Ok(downstream_status.into())
    }

    fn on_path(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Scripted runner for unit tests: records every invocation, never spawns anything.
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    pub struct FakeRunner {
        calls: RefCell<Vec<String>>,
        failing: RefCell<Vec<String>>,
        outputs: RefCell<Vec<(String, String)>>,
        path: RefCell<BTreeSet<String>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_path(programs: &[&str]) -> Self {
            let runner = Self::new();
            for program in programs {
                runner.add_to_path(program);
            }
            runner
        }

        pub fn add_to_path(&self, program: &str) {
            self.path.borrow_mut().insert(program.to_string());
        }

        /// Every command line starting with `prefix` exits with status 1.
        pub fn fail_on(&self, prefix: &str) {
            self.failing.borrow_mut().push(prefix.to_string());
        }

        /// Captured commands starting with `prefix` print `stdout`.
        pub fn output_for(&self, prefix: &str, stdout: &str) {
            self.outputs
                .borrow_mut()
                .push((prefix.to_string(), stdout.to_string()));
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn ran(&self, prefix: &str) -> bool {
            self.calls.borrow().iter().any(|c| c.starts_with(prefix))
        }

        fn respond(&self, line: String) -> CapturedOutput {
            let failed = self.failing.borrow().iter().any(|p| line.starts_with(p.as_str()));
            let stdout = self
                .outputs
                .borrow()
                .iter()
                .find(|(p, _)| line.starts_with(p.as_str()))
                .map(|(_, out)| out.clone())
                .unwrap_or_default();
            self.calls.borrow_mut().push(line);
            CapturedOutput {
                status: if failed { ProcessStatus::failed(1) } else { ProcessStatus::OK },
                stdout,
                stderr: if failed { "scripted failure".to_string() } else { String::new() },
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn stream(&self, cmd: &CommandSpec) -> io::Result<ProcessStatus> {
            Ok(self.respond(cmd.to_string()).status)
        }

        fn capture(&self, cmd: &CommandSpec) -> io::Result<CapturedOutput> {
            Ok(self.respond(cmd.to_string()))
        }

        fn pipe(&self, producer: &CommandSpec, consumer: &CommandSpec) -> io::Result<ProcessStatus> {
            Ok(self.respond(format!("{producer} | {consumer}")).status)
        }

        fn on_path(&self, program: &str) -> bool {
            self.path.borrow().contains(program)
        }
    }
}
