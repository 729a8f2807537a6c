//! Metadata pull wizard.
//!
//! A menu loop over retrieval strategies. Each entry maps a token to a
//! handler; the loop ends only on the exit entry or on a fatal error.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use itertools::Itertools;
use org_wizard_core::catalog::curated_types;
use org_wizard_core::config::WizardConfig;
use org_wizard_core::error::{Error, Result};
use org_wizard_core::execution::Invocation;
use org_wizard_core::project::{find_project_root, AliasLookup};

use crate::cli_args::PullArgs;
use crate::prompt::split_list;
use crate::session::Session;

/// Menu handler.
pub type Handler = fn(&mut PullWizard<'_, '_>) -> Result<()>;

/// What choosing a menu entry does.
#[derive(Clone, Copy)]
pub enum MenuAction {
    Run(Handler),
    Exit,
}

pub struct MenuEntry {
    pub token: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        token: "1",
        label: "Pull ALL source-tracked changes",
        action: MenuAction::Run(pull_all),
    },
    MenuEntry {
        token: "2",
        label: "Pull by METADATA TYPES",
        action: MenuAction::Run(pull_by_types),
    },
    MenuEntry {
        token: "3",
        label: "Pull by PATHS/FOLDERS",
        action: MenuAction::Run(pull_by_paths),
    },
    MenuEntry {
        token: "4",
        label: "Pull by MANIFEST (package.xml)",
        action: MenuAction::Run(pull_by_manifest),
    },
    MenuEntry {
        token: "5",
        label: "RESET TRACKING (then you can pull)",
        action: MenuAction::Run(reset_tracking),
    },
    MenuEntry {
        token: "6",
        label: "Exit",
        action: MenuAction::Exit,
    },
];

/// Finds the menu entry for a (trimmed) answer.
#[must_use]
pub fn lookup(token: &str) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.token == token)
}

/// Where and how to pull.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullTarget {
    pub project_root: PathBuf,
    pub target_org: String,
    pub ignore_conflicts: bool,
}

pub struct PullWizard<'s, 'a> {
    session: &'s mut Session<'a>,
    config: &'s WizardConfig,
    target: PullTarget,
}

impl<'s, 'a> PullWizard<'s, 'a> {
    pub fn new(session: &'s mut Session<'a>, config: &'s WizardConfig, target: PullTarget) -> Self {
        Self {
            session,
            config,
            target,
        }
    }

    #[must_use]
    pub fn target(&self) -> &PullTarget {
        &self.target
    }

    /// Runs the menu until the exit entry is chosen.
    pub fn run_menu(&mut self) -> Result<()> {
        loop {
            self.session.write_line("")?;
            self.session.reporter.step("SELECT ACTION");
            for entry in MENU {
                self.session
                    .write_line(&format!("  {}) {}", entry.token, entry.label))?;
            }

            let choice = self.session.read_line(&format!("Choose [1-{}]: ", MENU.len()))?;

            match lookup(choice.trim()).map(|entry| entry.action) {
                Some(MenuAction::Run(handler)) => handler(&mut *self)?,
                Some(MenuAction::Exit) => {
                    self.session.reporter.info("Bye!");
                    return Ok(());
                }
                None => self.session.reporter.warning("Invalid choice. Try again."),
            }
        }
    }

    fn platform(&self) -> Result<Invocation> {
        Ok(Invocation::new(&self.config.platform_program)?.current_dir(&self.target.project_root))
    }

    /// `sf project retrieve start --target-org <org>` plus `extra`.
    fn retrieve(&self, extra: Vec<String>) -> Result<Invocation> {
        Ok(self
            .platform()?
            .args(["project", "retrieve", "start"])
            .flag_value("--target-org", &self.target.target_org)
            .args(extra)
            .flag_if(self.target.ignore_conflicts, "--ignore-conflicts"))
    }

    fn existing_manifest(&mut self) -> Result<PathBuf> {
        let default_manifest = Path::new(&self.config.manifest_dir).join("package.xml");
        let answer = self.session.ask(
            "Path to package.xml",
            Some(&default_manifest.display().to_string()),
        )?;

        let manifest_path = self.target.project_root.join(answer);
        if !manifest_path.exists() {
            return Err(Error::missing_file(
                "package.xml",
                manifest_path.display().to_string(),
            ));
        }

        Ok(manifest_path)
    }

    fn generate_manifest(&mut self) -> Result<PathBuf> {
        let out_dir = self.target.project_root.join(&self.config.manifest_dir);
        fs::create_dir_all(&out_dir).map_err(|e| {
            Error::io_error(
                "manifest directory".to_string(),
                out_dir.display().to_string(),
                e,
            )
        })?;

        let invocation = self
            .platform()?
            .args(["project", "generate", "manifest"])
            .flag_value("--from-org", &self.target.target_org)
            .flag_value("--output-dir", out_dir.display().to_string());
        self.session.stream(&invocation)?;

        let manifest_path = out_dir.join("package.xml");
        if !manifest_path.exists() {
            return Err(Error::missing_file(
                "Generated package.xml",
                manifest_path.display().to_string(),
            ));
        }

        Ok(manifest_path)
    }
}

/// Retrieves every source-tracked change.
pub fn pull_all(wizard: &mut PullWizard<'_, '_>) -> Result<()> {
    let invocation = wizard.retrieve(Vec::new())?;
    wizard.session.stream(&invocation)
}

/// Retrieves catalog picks plus free-form types, one `--metadata` flag each.
pub fn pull_by_types(wizard: &mut PullWizard<'_, '_>) -> Result<()> {
    let picks = wizard
        .session
        .choose_many("Select metadata types to retrieve:", &curated_types())?;
    wizard.session.write_line("")?;
    let extra = wizard.session.ask(
        "Optionally enter additional types (comma-separated), e.g. 'NamedCredential,CustomMetadata':",
        None,
    )?;

    let types: IndexSet<String> = picks.into_iter().chain(split_list(&extra)).collect();

    if types.is_empty() {
        wizard
            .session
            .reporter
            .warning("No types selected. Nothing to do.");
        return Ok(());
    }

    wizard
        .session
        .reporter
        .status(&format!("Retrieving types: {}", types.iter().join(", ")));

    let flags = types
        .iter()
        .flat_map(|t| ["--metadata".to_string(), format!("{t}:*")])
        .collect();
    let invocation = wizard.retrieve(flags)?;
    wizard.session.stream(&invocation)
}

/// Retrieves project-relative paths, one `--source-dir` flag each.
pub fn pull_by_paths(wizard: &mut PullWizard<'_, '_>) -> Result<()> {
    let reporter = wizard.session.reporter;
    reporter.info("Enter one or more project paths (relative to repo root),");
    reporter.info("for example:");
    reporter.info(&format!("  {}/main/default/classes", wizard.config.source_dir));
    reporter.info(&format!(
        "  {}/main/default/objects/Account",
        wizard.config.source_dir
    ));
    reporter.info("Separate multiple entries with commas.");
    wizard.session.write_line("")?;

    let paths = split_list(&wizard.session.read_line("Paths: ")?);
    if paths.is_empty() {
        reporter.warning("No paths provided. Nothing to do.");
        return Ok(());
    }

    let flags = paths
        .iter()
        .flat_map(|p| ["--source-dir".to_string(), p.clone()])
        .collect();
    let invocation = wizard.retrieve(flags)?;
    wizard.session.stream(&invocation)
}

pub fn pull_by_manifest(wizard: &mut PullWizard<'_, '_>) -> Result<()> {
    wizard.session.reporter.info("Choose one:");
    wizard.session.write_line("  1) Use existing package.xml")?;
    wizard
        .session
        .write_line("  2) Generate package.xml from org, then retrieve")?;
    let choice = wizard.session.read_line("Enter 1 or 2: ")?;

    let manifest_path = match choice.trim() {
        "1" => wizard.existing_manifest()?,
        "2" => wizard.generate_manifest()?,
        _ => {
            wizard
                .session
                .reporter
                .warning("Invalid choice; aborting manifest flow.");
            return Ok(());
        }
    };

    let invocation = wizard.retrieve(vec![
        "--manifest".to_string(),
        manifest_path.display().to_string(),
    ])?;
    wizard.session.stream(&invocation)
}

/// Resets local source tracking after confirmation.
pub fn reset_tracking(wizard: &mut PullWizard<'_, '_>) -> Result<()> {
    wizard.session.reporter.warning(
        "This will reset local source tracking. Useful when the workspace and org drift.",
    );
    if !wizard.session.ask_bool("Proceed with reset?", false)? {
        wizard.session.reporter.info("Canceled.");
        return Ok(());
    }

    let invocation = wizard
        .platform()?
        .args(["project", "reset", "tracking"])
        .flag_value("--target-org", &wizard.target.target_org)
        .arg("--no-prompt");
    wizard.session.stream(&invocation)
}

/// Resolves the pull target from flags, the default alias and operator answers.
pub fn resolve_target(
    session: &mut Session<'_>,
    args: &PullArgs,
    project_root: PathBuf,
    lookup: &dyn AliasLookup,
) -> Result<PullTarget> {
    let target_org = match &args.target_org {
        Some(target_org) => target_org.trim().to_string(),
        None => {
            let default_alias = lookup.default_alias();
            session.ask("Target org alias/username?", default_alias.as_deref())?
        }
    };

    if target_org.is_empty() {
        return Err(Error::MissingValue(
            "You must provide a target org alias/username.".to_string(),
        ));
    }

    let ignore_conflicts =
        args.ignore_conflicts || session.ask_bool("Ignore conflicts during retrieve?", false)?;

    Ok(PullTarget {
        project_root,
        target_org,
        ignore_conflicts,
    })
}

/// The whole pull wizard, from project discovery to the exit entry.
pub fn run(
    session: &mut Session<'_>,
    config: &WizardConfig,
    args: &PullArgs,
    current_dir: &Path,
    lookup: &dyn AliasLookup,
) -> Result<()> {
    let project_root = find_project_root(current_dir, &config.project_marker)?;
    session.reporter.header("Salesforce Pull Wizard");
    session
        .reporter
        .info(&format!("Project root: {}", project_root.display()));

    let target = resolve_target(session, args, project_root, lookup)?;
    PullWizard::new(session, config, target).run_menu()
}
