//! Scratch environment bootstrap.
//!
//! A fixed pipeline: branch, CLI check, hub login, environment creation,
//! source deployment, launch. Each stage returns a `Result`; the first error
//! ends the run before any later stage issues a command.

use std::path::{Path, PathBuf};

use org_wizard_core::alias::EnvironmentAlias;
use org_wizard_core::config::WizardConfig;
use org_wizard_core::error::{Error, Result};
use org_wizard_core::execution::Invocation;
use org_wizard_core::project::find_project_root;

use crate::cli_args::StartArgs;
use crate::session::Session;

/// Switches that shape the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub hub_url: String,
    pub force_hub_login: bool,
    pub preview: bool,
}

pub struct Bootstrap<'s, 'a> {
    session: &'s mut Session<'a>,
    config: &'s WizardConfig,
    project_root: PathBuf,
    alias: EnvironmentAlias,
    options: BootstrapOptions,
}

impl<'s, 'a> Bootstrap<'s, 'a> {
    pub fn new(
        session: &'s mut Session<'a>,
        config: &'s WizardConfig,
        project_root: PathBuf,
        alias: EnvironmentAlias,
        options: BootstrapOptions,
    ) -> Self {
        Self {
            session,
            config,
            project_root,
            alias,
            options,
        }
    }

    #[must_use]
    pub fn alias(&self) -> &EnvironmentAlias {
        &self.alias
    }

    /// Runs every stage in order.
    pub fn run(&mut self) -> Result<()> {
        self.prepare_branch()?;
        self.session.reporter.success("Git branch ready.");

        self.check_cli()?;
        self.authenticate()?;
        self.session.reporter.success("Dev Hub ready.");

        self.create_environment()?;
        self.session.reporter.success("Scratch org created.");

        self.deploy_source()?;
        self.session.reporter.success("Source deployed.");

        self.open_environment()?;
        self.session.reporter.success("All done. Happy building!");
        Ok(())
    }

    fn vcs(&self) -> Result<Invocation> {
        Invocation::new(&self.config.vcs_program)
    }

    fn platform(&self) -> Result<Invocation> {
        Invocation::new(&self.config.platform_program)
    }

    pub fn prepare_branch(&mut self) -> Result<()> {
        let reporter = self.session.reporter;
        let trunk = self.config.trunk_branch.clone();
        let branch = self.alias.branch().to_string();

        reporter.step("GITHUB");
        reporter.status(&format!(
            "Checking out `{trunk}` branch and getting latest update from Github ..."
        ));

        let checkout_trunk = self.vcs()?.args(["checkout", trunk.as_str()]);
        self.session.stream(&checkout_trunk)?;
        let pull_trunk = self
            .vcs()?
            .args(["pull", self.config.remote.as_str(), trunk.as_str()]);
        self.session.stream(&pull_trunk)?;

        if !self.alias.is_review() {
            reporter.status(&format!("Create and push feature branch from `{trunk}`"));
            reporter.status("Creating new development branch ...");

            let create = self
                .vcs()?
                .args(["checkout", "-b", branch.as_str(), trunk.as_str()]);
            return self.session.stream(&create);
        }

        reporter.status("--- Review mode ---");
        reporter.status("Checking out development branch ...");

        let list = self.vcs()?.args(["branch", "--list", branch.as_str()]);
        let existing = self.session.capture(&list)?;
        if existing.contains(&branch) {
            reporter.status("Deleting local branch ...");
            let delete = self.vcs()?.args(["branch", "-D", branch.as_str()]);
            self.session.stream(&delete)?;
        }

        let tracking = self.vcs()?.args([
            "checkout".to_string(),
            "-b".to_string(),
            branch.clone(),
            format!("{}/{branch}", self.config.remote),
        ]);
        self.session.stream(&tracking)
    }

    pub fn check_cli(&mut self) -> Result<()> {
        self.session.reporter.step("CHECK SF CLI");
        self.session
            .reporter
            .status("Validating SFDC Binary is available ...");

        let version = self.platform()?.arg("--version");
        self.session.capture(&version).map(|_| ())
    }

    fn hub_listed(&mut self) -> Result<bool> {
        let list = self.platform()?.args(["org", "list"]);
        let orgs = self.session.capture(&list)?;
        Ok(orgs.contains(&self.config.hub_alias))
    }

    pub fn authenticate(&mut self) -> Result<()> {
        let reporter = self.session.reporter;
        let hub_alias = self.config.hub_alias.clone();

        reporter.step("CHECK SFDX LOGIN STATUS");
        reporter.status("Checking SFDX Devhub login status ...");
        reporter.status("Retrieving list of Salesforce Orgs ...");
        reporter.step("AUTHORIZING DEV HUB");

        let listed = self.hub_listed()?;
        if self.options.force_hub_login || !listed {
            reporter.status("Logging into Dev Hub ...");
            let login = self
                .platform()?
                .args(["org", "login", "web"])
                .flag_value("--alias", &hub_alias)
                .arg("--set-default-dev-hub")
                .flag_value("--instance-url", &self.options.hub_url);
            self.session.stream(&login)?;
        } else {
            reporter.status(&format!("Using existing Dev Hub alias `{hub_alias}`."));
        }

        if !self.hub_listed()? {
            return Err(Error::Verification(
                "Devhub alias not found after login".to_string(),
            ));
        }

        Ok(())
    }

    fn definition_file(&self) -> PathBuf {
        self.project_root.join(&self.config.definition_file)
    }

    pub fn create_environment(&mut self) -> Result<()> {
        self.session.reporter.step("CREATE SCRATCH ORG");
        self.session
            .reporter
            .status("Attempting to deploy new Scratch Org...");

        let definition_file = self.definition_file();
        if !definition_file.exists() {
            return Err(Error::missing_file(
                "Scratch definition",
                definition_file.display().to_string(),
            ));
        }

        let duration_days = self.config.duration_for(self.alias.is_review());
        let create = self
            .platform()?
            .args(["org", "create", "scratch"])
            .flag_value("--definition-file", definition_file.display().to_string())
            .flag_value("--alias", self.alias.as_str())
            .flag_value("--duration-days", duration_days.to_string())
            .arg("--set-default");
        let create = if self.options.preview {
            create.flag_value("--release", "Preview")
        } else {
            create
        };

        self.session.stream(&create)
    }

    pub fn deploy_source(&mut self) -> Result<()> {
        self.session.reporter.step("DEPLOY SOURCE");

        if !self.project_root.is_dir() {
            return Err(Error::missing_file(
                "Project directory",
                self.project_root.display().to_string(),
            ));
        }

        self.session
            .reporter
            .status(&format!("Deploying {} to scratch org ...", self.config.source_dir));

        let deploy = self
            .platform()?
            .args(["project", "deploy", "start"])
            .flag_value("--target-org", self.alias.as_str())
            .flag_value(
                "--source-dir",
                self.project_root
                    .join(&self.config.source_dir)
                    .display()
                    .to_string(),
            )
            .current_dir(&self.project_root);
        self.session.stream(&deploy)
    }

    pub fn open_environment(&mut self) -> Result<()> {
        self.session.reporter.step("OPEN ORG");
        self.session
            .reporter
            .status("Opening the scratch org in your browser ...");

        let open = self
            .platform()?
            .args(["org", "open"])
            .flag_value("--target-org", self.alias.as_str());
        self.session.stream(&open)
    }
}

/// Options from flags, with the configured hub URL as fallback.
#[must_use]
pub fn options_from_args(args: &StartArgs, config: &WizardConfig) -> BootstrapOptions {
    BootstrapOptions {
        hub_url: args
            .devhub_url
            .clone()
            .unwrap_or_else(|| config.hub_url.clone()),
        force_hub_login: args.force_devhub_connection,
        preview: args.preview,
    }
}

/// The environment name from the flag, or asked for when absent.
pub fn resolve_alias(session: &mut Session<'_>, args: &StartArgs) -> Result<(String, EnvironmentAlias)> {
    let raw = match &args.environment {
        Some(environment) => environment.clone(),
        None => session.ask("Environment/branch alias (e.g. fe-hello)?", None)?,
    };

    let alias = EnvironmentAlias::new(&raw, args.review);
    if alias.is_empty() {
        return Err(Error::MissingValue(
            "You must provide an environment/branch alias.".to_string(),
        ));
    }

    Ok((raw, alias))
}

/// The whole bootstrap, from project discovery to opening the org.
pub fn run(
    session: &mut Session<'_>,
    config: &WizardConfig,
    args: &StartArgs,
    current_dir: &Path,
) -> Result<()> {
    session.reporter.header("Scratch Org Script");

    let project_root = find_project_root(current_dir, &config.project_marker)?;
    let (raw, alias) = resolve_alias(session, args)?;

    session
        .reporter
        .status(&format!("Environment (raw): {raw}"));
    session
        .reporter
        .status(&format!("Normalized alias: {alias}"));

    let options = options_from_args(args, config);
    Bootstrap::new(session, config, project_root, alias, options).run()
}
