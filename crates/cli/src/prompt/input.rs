use org_wizard_core::error::Result;
use org_wizard_core::report::Reporter;

use super::selection::{parse_selection, Selection};
use super::terminal::Terminal;

/// Prompts for a single value.
///
/// Returns the trimmed answer, or `default` (empty when `None`) if the answer is blank.
pub fn ask(terminal: &mut dyn Terminal, prompt: &str, default: Option<&str>) -> Result<String> {
    let full_prompt = match default.filter(|d| !d.is_empty()) {
        Some(default) => format!("{prompt} [{default}] "),
        None => format!("{prompt} "),
    };

    let read_value = terminal.read_line(&full_prompt)?.trim().to_string();

    if read_value.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(read_value)
    }
}

/// Prompts for a yes/no answer.
///
/// `y` and `yes` (any case) are true, blank is `default`, anything else is false.
pub fn ask_bool(terminal: &mut dyn Terminal, prompt: &str, default: bool) -> Result<bool> {
    let suffix = if default { "[Y/n]" } else { "[y/N]" };

    let lowercase_input = terminal
        .read_line(&format!("{prompt} {suffix} "))?
        .trim()
        .to_lowercase();

    if lowercase_input.is_empty() {
        return Ok(default);
    }

    Ok(matches!(lowercase_input.as_str(), "y" | "yes"))
}

/// Shows a numbered list and lets the operator pick several entries by index.
///
/// Invalid tokens are warned about and skipped; a blank answer yields no picks.
pub fn choose_many(
    terminal: &mut dyn Terminal,
    reporter: &dyn Reporter,
    prompt: &str,
    options: &[String],
) -> Result<Vec<String>> {
    terminal.write_line("")?;
    reporter.info(prompt);
    for (i, option) in options.iter().enumerate() {
        terminal.write_line(&format!("  {:2}) {option}", i + 1))?;
    }
    terminal.write_line("")?;

    let raw = terminal.read_line("Enter number(s) separated by comma, or leave blank to cancel: ")?;

    let Selection { picks, rejected } = parse_selection(options, &raw);
    for (token, reason) in rejected {
        reporter.warning(&format!("Ignoring '{token}' ({reason})."));
    }

    Ok(picks)
}
