use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};
use crate::report::Reporter;

/// How a child process's output is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Inherit stdio so the operator sees output live.
    Stream,
    /// Collect stdout and stderr as text for the caller.
    Capture,
}

/// A single external command: program, arguments and optional working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    working_directory: Option<PathBuf>,
}

impl Invocation {
    /// Starts an invocation of `program`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyProgram`] if the program name is blank.
    pub fn new(program: impl Into<String>) -> Result<Self> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(Error::EmptyProgram);
        }

        Ok(Self {
            program,
            args: Vec::new(),
            working_directory: None,
        })
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Appends `flag value`.
    #[must_use]
    pub fn flag_value(self, flag: impl Into<String>, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    /// Appends `flag` only when `enabled`.
    #[must_use]
    pub fn flag_if(self, enabled: bool, flag: impl Into<String>) -> Self {
        if enabled {
            self.arg(flag)
        } else {
            self
        }
    }

    #[must_use]
    pub fn current_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(directory.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    /// Program followed by arguments, as owned tokens.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.args.len() + 1);
        tokens.push(self.program.clone());
        tokens.extend(self.args.iter().cloned());
        tokens
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(working_directory) = &self.working_directory {
            command.current_dir(working_directory);
        }
        command
    }
}

impl Display for Invocation {
    /// Shell-quoted command line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&shell_words::join(self.tokens()))
    }
}

/// Executes invocations synchronously.
pub trait Runner {
    /// Runs `invocation` to completion.
    ///
    /// Returns the captured output in [`OutputMode::Capture`], `None` when streaming.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exits non-zero.
    fn run(&mut self, invocation: &Invocation, mode: OutputMode) -> Result<Option<String>>;

    /// Runs with inherited stdio.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    fn stream(&mut self, invocation: &Invocation) -> Result<()> {
        self.run(invocation, OutputMode::Stream).map(|_| ())
    }

    /// Runs and returns merged stdout and stderr.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    fn capture(&mut self, invocation: &Invocation) -> Result<String> {
        Ok(self
            .run(invocation, OutputMode::Capture)?
            .unwrap_or_default())
    }
}

/// [`Runner`] backed by real child processes.
pub struct ProcessRunner<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> ProcessRunner<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    fn spawn_error(command_line: &str, original: std::io::Error) -> Error {
        Error::SubProcess {
            command: command_line.to_string(),
            original,
        }
    }
}

impl<R: Reporter> Runner for ProcessRunner<R> {
    fn run(&mut self, invocation: &Invocation, mode: OutputMode) -> Result<Option<String>> {
        let command_line = invocation.to_string();
        self.reporter.status(&format!("$ {command_line}"));
        if let Some(working_directory) = invocation.working_directory() {
            debug!("Working directory: `{}`", working_directory.display());
        }

        let mut command = invocation.to_command();

        let (success, captured) = match mode {
            OutputMode::Stream => {
                let status = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .spawn()
                    .and_then(|mut child| child.wait())
                    .map_err(|e| Self::spawn_error(&command_line, e))?;
                (status.success(), None)
            }
            OutputMode::Capture => {
                let output = command
                    .stdin(Stdio::inherit())
                    .output()
                    .map_err(|e| Self::spawn_error(&command_line, e))?;

                // Separate pipes: all of stdout, then all of stderr
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                (output.status.success(), Some(text))
            }
        };

        if !success {
            self.reporter.error(&format!("FAILED: {command_line}"));
            if let Some(captured) = captured.as_deref().filter(|text| !text.is_empty()) {
                println!("{captured}");
            }
            return Err(Error::SubProcessExit {
                command: command_line,
            });
        }

        self.reporter.success(&command_line);
        Ok(captured)
    }
}
