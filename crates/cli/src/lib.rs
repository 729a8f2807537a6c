//! Org Wizard CLI Library
//!
//! Interactive wizards that drive the `sf` CLI and `git` for Salesforce DX
//! projects.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing for both binaries
//! - [`prompt`]: Single-value, yes/no and multi-select prompts
//! - [`session`]: The runner, terminal and reporter a workflow works with
//! - [`workflows`]: The pull menu and the bootstrap pipeline
//! - [`logging`]: Console log format
//!
//! # Examples
//!
//! ```bash
//! # Pull wizard, asking for everything
//! org-pull
//!
//! # Pull wizard against a known org, ignoring conflicts
//! org-pull --target-org tstools-14367 --ignore-conflicts
//!
//! # New feature branch and scratch org
//! org-start -e "FE Hello"
//!
//! # Review someone else's branch in a short-lived org
//! org-start -e fe-hello --review
//! ```

use std::process::ExitCode;

use org_wizard_core::error::{Error, Result};
use org_wizard_core::report::Reporter;

pub mod cli_args;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod workflows;

/// Maps a wizard outcome to the process exit code, reporting any error.
///
/// Failed subprocesses were already reported by the runner.
pub fn finish(result: Result<()>, reporter: &dyn Reporter) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::SubProcessExit { .. }) => ExitCode::FAILURE,
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use org_wizard_core::report::Notice;

    use super::*;

    #[derive(Default)]
    struct Errors(RefCell<Vec<String>>);

    impl Reporter for Errors {
        fn report(&self, notice: Notice, message: &str) {
            if notice == Notice::Error {
                self.0.borrow_mut().push(message.to_string());
            }
        }
    }

    #[test]
    fn test_success_exit() {
        let reporter = Errors::default();
        let code = finish(Ok(()), &reporter);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
        assert!(reporter.0.borrow().is_empty());
    }

    #[test]
    fn test_failed_subprocess_not_reported_twice() {
        let reporter = Errors::default();
        let code = finish(
            Err(Error::SubProcessExit {
                command: "sf org list".to_string(),
            }),
            &reporter,
        );
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        assert!(reporter.0.borrow().is_empty());
    }

    #[test]
    fn test_other_errors_reported() {
        let reporter = Errors::default();
        let code = finish(Err(Error::Verification("no hub".to_string())), &reporter);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        assert_eq!(reporter.0.borrow().len(), 1);
    }
}
