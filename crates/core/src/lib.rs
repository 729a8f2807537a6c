//! Org Wizard Core Library
//!
//! Building blocks shared by the `org-pull` and `org-start` wizards, which
//! drive the `sf` platform CLI and `git` to set up scratch environments and
//! pull metadata.
//!
//! # Key Features
//!
//! - **Invocations**: Typed command lines with shell-quoted display
//! - **Runners**: Synchronous execution with streamed or captured output
//! - **Reporting**: Leveled operator messages behind a swappable trait
//! - **Configuration**: Optional YAML overrides for tool names and paths
//! - **Discovery**: Project root walk-up and default org alias lookup
//!
//! # Examples
//!
//! ```no_run
//! use org_wizard_core::execution::{Invocation, ProcessRunner, Runner};
//! use org_wizard_core::report::LogReporter;
//!
//! let mut runner = ProcessRunner::new(LogReporter);
//! let version = runner.capture(&Invocation::new("sf")?.arg("--version"))?;
//! println!("{version}");
//! # Ok::<(), org_wizard_core::error::Error>(())
//! ```

pub mod alias;
pub mod catalog;
pub mod config;
pub mod error;
pub mod execution;
pub mod project;
pub mod report;
