//! Parsing of comma-separated operator answers.

use std::fmt::{Display, Formatter};

/// Why a token of a multi-select answer was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NotANumber,
    OutOfRange,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NotANumber => f.write_str("not a number"),
            Rejection::OutOfRange => f.write_str("out of range"),
        }
    }
}

/// Result of parsing a multi-select answer against a list of options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen options, in the order they were entered.
    pub picks: Vec<String>,
    /// Skipped tokens with the reason for each.
    pub rejected: Vec<(String, Rejection)>,
}

impl Selection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

/// Parses 1-based indices like `"1,3,7"` against `options`.
///
/// Invalid tokens never fail the parse, they are recorded in
/// [`Selection::rejected`]. Blank tokens are dropped silently.
#[must_use]
pub fn parse_selection(options: &[String], raw: &str) -> Selection {
    let mut selection = Selection::default();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            selection
                .rejected
                .push((token.to_string(), Rejection::NotANumber));
            continue;
        }

        // All digits, so a parse failure can only be an overflow
        match token.parse::<usize>() {
            Ok(index) if (1..=options.len()).contains(&index) => {
                selection.picks.push(options[index - 1].clone());
            }
            _ => selection
                .rejected
                .push((token.to_string(), Rejection::OutOfRange)),
        }
    }

    selection
}

/// Splits a free-form comma-separated list, trimming and dropping blanks.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
