//! Wizard configuration.
//!
//! Tool names, branch names and project-relative paths that both wizards
//! share. Every value has a default, so a missing config file is not an error
//! unless its path was given explicitly.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the wizard configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.org-wizard/config.yml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WizardConfig {
    pub platform_program: String,
    pub vcs_program: String,
    pub trunk_branch: String,
    pub remote: String,
    pub hub_alias: String,
    pub hub_url: String,
    pub project_marker: String,
    pub definition_file: String,
    pub source_dir: String,
    pub manifest_dir: String,
    pub duration_days: u32,
    pub review_duration_days: u32,
    pub org_config_dir: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            platform_program: "sf".to_string(),
            vcs_program: "git".to_string(),
            trunk_branch: "main".to_string(),
            remote: "origin".to_string(),
            hub_alias: "DevHub".to_string(),
            hub_url: "https://login.salesforce.com".to_string(),
            project_marker: "sfdx-project.json".to_string(),
            definition_file: "config/project-scratch-def.json".to_string(),
            source_dir: "force-app".to_string(),
            manifest_dir: "manifest".to_string(),
            duration_days: 30,
            review_duration_days: 7,
            org_config_dir: "~/.sf/orgs".to_string(),
        }
    }
}

impl WizardConfig {
    /// Scratch environment lifetime for the given mode.
    #[must_use]
    pub fn duration_for(&self, review_mode: bool) -> u32 {
        if review_mode {
            self.review_duration_days
        } else {
            self.duration_days
        }
    }

    /// The org configuration directory with `~` expanded.
    #[must_use]
    pub fn expanded_org_config_dir(&self) -> String {
        shellexpand::tilde(&self.org_config_dir).to_string()
    }
}

/// Resolves the configuration file path.
///
/// Uses the custom path when given, otherwise the default. `~` is expanded.
///
/// # Examples
///
/// ```
/// use org_wizard_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads the configuration.
///
/// An absent file at the default location gives [`WizardConfig::default`].
///
/// # Errors
///
/// Returns an error if an explicitly given file is missing, or if any config
/// file that exists cannot be read or parsed.
pub fn load_config(config_path_arg: &Option<String>) -> Result<WizardConfig> {
    let config_path = get_config_path(config_path_arg);
    debug!("Config path: `{}`", config_path);

    if config_path_arg.is_none() && !Path::new(&config_path).exists() {
        return Ok(WizardConfig::default());
    }

    let contents = fs::read_to_string(&config_path)
        .map_err(|e| Error::io_error("config file".to_string(), config_path.clone(), e))?;

    if contents.trim().is_empty() {
        return Ok(WizardConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error("reading".to_string(), "config".to_string(), config_path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yml".to_string());
        assert_eq!(get_config_path(&custom_path), "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        assert!(result.ends_with("config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "trunk_branch: develop\nreview_duration_days: 3\n").unwrap();
        let path = Some(temp_file.path().to_str().unwrap().to_string());

        let config = load_config(&path).unwrap();

        assert_eq!(config.trunk_branch, "develop");
        assert_eq!(config.review_duration_days, 3);
        assert_eq!(config.platform_program, "sf");
        assert_eq!(config.hub_alias, "DevHub");
    }

    #[test]
    fn test_empty_config_file_is_all_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = Some(temp_file.path().to_str().unwrap().to_string());

        assert_eq!(load_config(&path).unwrap(), WizardConfig::default());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let path = Some("/definitely/not/here/config.yml".to_string());
        assert!(matches!(load_config(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "duration_days: [not, a, number]\n").unwrap();
        let path = Some(temp_file.path().to_str().unwrap().to_string());

        assert!(matches!(load_config(&path), Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_duration_for_mode() {
        let config = WizardConfig::default();
        assert_eq!(config.duration_for(false), 30);
        assert_eq!(config.duration_for(true), 7);
    }
}
