use std::fmt::{Display, Formatter};

/// Suffix appended to the alias of review-mode environments
pub const REVIEW_SUFFIX: &str = "-review";

/// Trims, lower-cases and replaces spaces with hyphens.
///
/// ```
/// use org_wizard_core::alias::normalize;
///
/// assert_eq!(normalize("  FE Hello "), "fe-hello");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "-")
}

/// Name of a scratch environment and the branch it is developed on.
///
/// Built once per run and never changed afterwards; there are no mutators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentAlias {
    branch: String,
    alias: String,
    review: bool,
}

impl EnvironmentAlias {
    #[must_use]
    pub fn new(raw: &str, review: bool) -> Self {
        let branch = normalize(raw);
        let alias = if review {
            format!("{branch}{REVIEW_SUFFIX}")
        } else {
            branch.clone()
        };

        Self {
            branch,
            alias,
            review,
        }
    }

    /// The org alias, carrying the review suffix in review mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.alias
    }

    /// The branch name, which never carries the review suffix.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn is_review(&self) -> bool {
        self.review
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branch.is_empty()
    }
}

impl Display for EnvironmentAlias {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_example() {
        assert_eq!(normalize("FE Hello"), "fe-hello");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["FE Hello", "  multi  space Name ", "already-normal", "", "X"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn test_review_alias_has_suffix() {
        let alias = EnvironmentAlias::new("FE Hello", true);
        assert_eq!(alias.as_str(), "fe-hello-review");
        assert_eq!(alias.branch(), "fe-hello");
        assert!(alias.is_review());
    }

    #[test]
    fn test_fresh_alias_has_no_suffix() {
        let alias = EnvironmentAlias::new("FE Hello", false);
        assert_eq!(alias.as_str(), "fe-hello");
        assert_eq!(alias.branch(), "fe-hello");
        assert!(!alias.as_str().ends_with(REVIEW_SUFFIX));
        assert_eq!(alias.to_string(), "fe-hello");
    }

    #[test]
    fn test_blank_name_is_empty() {
        assert!(EnvironmentAlias::new("   ", false).is_empty());
        assert!(EnvironmentAlias::new("   ", true).is_empty());
    }
}
