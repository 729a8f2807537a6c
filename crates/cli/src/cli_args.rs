//! Command-line arguments for both wizards.
//!
//! Anything not given here is asked for interactively.

use clap::Parser;

/// Interactive pull wizard for Salesforce metadata (sf CLI).
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use org_wizard_cli::cli_args::PullArgs;
///
/// let args = PullArgs::parse_from(["org-pull", "--target-org", "tstools-14367"]);
/// assert_eq!(args.target_org.as_deref(), Some("tstools-14367"));
/// ```
#[derive(Parser, Debug)]
#[command(name = "org-pull", term_width = 0)]
pub struct PullArgs {
    /// Org alias/username to pull from (e.g. `tstools-14367`).
    ///
    /// If not provided, the wizard asks, offering the default org as the answer.
    #[arg(long)]
    pub target_org: Option<String>,

    /// Pass `--ignore-conflicts` to retrieve commands.
    #[arg(long, action)]
    pub ignore_conflicts: bool,

    /// Path to the wizard config file YAML.
    ///
    /// If not provided, defaults to `~/.org-wizard/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,
}

/// Create and prep a scratch org (sf CLI).
#[derive(Parser, Debug)]
#[command(name = "org-start", term_width = 0)]
#[allow(clippy::struct_excessive_bools)]
pub struct StartArgs {
    /// Env/branch alias, e.g. `fe-hello`. Spaces become hyphens.
    #[arg(long, short = 'e')]
    pub environment: Option<String>,

    /// Check out the existing remote branch and create a short-lived review org.
    #[arg(long, action)]
    pub review: bool,

    /// Dev Hub login URL. Defaults to the configured `hub_url`.
    #[arg(long)]
    pub devhub_url: Option<String>,

    /// Force re-auth to Dev Hub.
    #[arg(long, action)]
    pub force_devhub_connection: bool,

    /// Try the seasonal Preview release (if supported).
    #[arg(long, action)]
    pub preview: bool,

    /// Path to the wizard config file YAML.
    ///
    /// If not provided, defaults to `~/.org-wizard/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_args_default_values() {
        let args = PullArgs::parse_from(["org-pull"]);

        assert!(args.target_org.is_none());
        assert!(!args.ignore_conflicts);
        assert!(args.config_path.is_none());
    }

    #[test]
    fn test_pull_args_long_flags() {
        let args = PullArgs::parse_from([
            "org-pull",
            "--target-org",
            "tstools-14367",
            "--ignore-conflicts",
            "--config-path",
            "/custom/config.yml",
        ]);

        assert_eq!(args.target_org, Some("tstools-14367".to_string()));
        assert!(args.ignore_conflicts);
        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
    }

    #[test]
    fn test_start_args_default_values() {
        let args = StartArgs::parse_from(["org-start"]);

        assert!(args.environment.is_none());
        assert!(!args.review);
        assert!(args.devhub_url.is_none());
        assert!(!args.force_devhub_connection);
        assert!(!args.preview);
    }

    #[test]
    fn test_start_args_all_flags() {
        let args = StartArgs::parse_from([
            "org-start",
            "-e",
            "FE Hello",
            "--review",
            "--devhub-url",
            "https://test.salesforce.com",
            "--force-devhub-connection",
            "--preview",
            "-c",
            "/custom/config.yml",
        ]);

        assert_eq!(args.environment, Some("FE Hello".to_string()));
        assert!(args.review);
        assert_eq!(
            args.devhub_url,
            Some("https://test.salesforce.com".to_string())
        );
        assert!(args.force_devhub_connection);
        assert!(args.preview);
        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
    }

    #[test]
    fn test_start_args_reject_unknown_flag() {
        assert!(StartArgs::try_parse_from(["org-start", "--bogus"]).is_err());
    }
}
