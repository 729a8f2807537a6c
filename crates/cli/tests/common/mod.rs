//! Test doubles for the wizard collaborators.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use org_wizard_core::error::{Error, Result};
use org_wizard_core::execution::{Invocation, OutputMode, Runner};
use org_wizard_core::report::{Notice, Reporter};
use org_wizard_cli::prompt::Terminal;

/// Terminal fed from a fixed script of answers.
#[derive(Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(Error::InputClosed)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}

/// Reporter that keeps every message.
#[derive(Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<(Notice, String)>>,
}

impl RecordingReporter {
    pub fn messages(&self, notice: Notice) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(n, _)| *n == notice)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn count(&self, notice: Notice) -> usize {
        self.messages(notice).len()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, notice: Notice, message: &str) {
        self.messages
            .borrow_mut()
            .push((notice, message.to_string()));
    }
}

/// Canned result for invocations starting with a token prefix.
#[derive(Clone, Debug)]
pub enum Response {
    Output(String),
    Fail,
}

/// One recorded invocation.
#[derive(Clone, Debug)]
pub struct Call {
    pub tokens: Vec<String>,
    pub mode: OutputMode,
    pub working_directory: Option<PathBuf>,
}

impl Call {
    pub fn line(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Runner that records invocations instead of spawning them.
///
/// Responses for a prefix are consumed in order; the last one sticks.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: Vec<Call>,
    responses: Vec<(Vec<String>, VecDeque<Response>)>,
}

impl FakeRunner {
    pub fn respond(mut self, prefix: &[&str], responses: Vec<Response>) -> Self {
        self.responses.push((
            prefix.iter().map(ToString::to_string).collect(),
            responses.into(),
        ));
        self
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls.iter().map(Call::line).collect()
    }

    pub fn issued(&self, prefix: &[&str]) -> bool {
        self.calls.iter().any(|call| {
            call.tokens.len() >= prefix.len()
                && call.tokens.iter().zip(prefix).all(|(token, p)| token == p)
        })
    }

    fn next_response(&mut self, tokens: &[String]) -> Option<Response> {
        let (_, queue) = self
            .responses
            .iter_mut()
            .find(|(prefix, _)| tokens.starts_with(prefix))?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Runner for FakeRunner {
    fn run(&mut self, invocation: &Invocation, mode: OutputMode) -> Result<Option<String>> {
        let tokens = invocation.tokens();
        self.calls.push(Call {
            tokens: tokens.clone(),
            mode,
            working_directory: invocation.working_directory().map(Path::to_path_buf),
        });

        let output = match self.next_response(&tokens) {
            Some(Response::Fail) => {
                return Err(Error::SubProcessExit {
                    command: invocation.to_string(),
                })
            }
            Some(Response::Output(output)) => output,
            None => String::new(),
        };

        Ok(match mode {
            OutputMode::Stream => None,
            OutputMode::Capture => Some(output),
        })
    }
}

/// A temporary project directory containing the marker file.
pub fn project_dir() -> tempfile::TempDir {
    let directory = tempfile::TempDir::new().unwrap();
    std::fs::write(directory.path().join("sfdx-project.json"), "{}").unwrap();
    directory
}

pub fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}
