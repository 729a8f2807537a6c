use std::env;
use std::process::ExitCode;

use clap::Parser;
use org_wizard_cli::cli_args::StartArgs;
use org_wizard_cli::prompt::StdTerminal;
use org_wizard_cli::session::Session;
use org_wizard_cli::workflows::bootstrap;
use org_wizard_cli::{finish, logging};
use org_wizard_core::config;
use org_wizard_core::error::Result;
use org_wizard_core::execution::ProcessRunner;
use org_wizard_core::report::LogReporter;

fn execute(reporter: &LogReporter) -> Result<()> {
    let args = StartArgs::parse();
    let config = config::load_config(&args.config_path)?;
    let current_dir = env::current_dir()?;

    let mut runner = ProcessRunner::new(*reporter);
    let mut terminal = StdTerminal;
    let mut session = Session::new(&mut runner, &mut terminal, reporter);

    bootstrap::run(&mut session, &config, &args, &current_dir)
}

fn main() -> ExitCode {
    logging::init();
    let reporter = LogReporter;

    finish(execute(&reporter), &reporter)
}
