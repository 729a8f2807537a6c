use org_wizard_core::error::Result;
use org_wizard_core::execution::{Invocation, Runner};
use org_wizard_core::report::Reporter;

use crate::prompt::{self, Terminal};

/// The collaborators a workflow talks to: processes, the operator, the log.
pub struct Session<'a> {
    pub runner: &'a mut dyn Runner,
    pub terminal: &'a mut dyn Terminal,
    pub reporter: &'a dyn Reporter,
}

impl<'a> Session<'a> {
    pub fn new(
        runner: &'a mut dyn Runner,
        terminal: &'a mut dyn Terminal,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            runner,
            terminal,
            reporter,
        }
    }

    pub fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        prompt::ask(self.terminal, prompt, default)
    }

    pub fn ask_bool(&mut self, prompt: &str, default: bool) -> Result<bool> {
        prompt::ask_bool(self.terminal, prompt, default)
    }

    pub fn choose_many(&mut self, prompt: &str, options: &[String]) -> Result<Vec<String>> {
        prompt::choose_many(self.terminal, self.reporter, prompt, options)
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.terminal.read_line(prompt)
    }

    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.terminal.write_line(text)
    }

    pub fn stream(&mut self, invocation: &Invocation) -> Result<()> {
        self.runner.stream(invocation)
    }

    pub fn capture(&mut self, invocation: &Invocation) -> Result<String> {
        self.runner.capture(invocation)
    }
}
