//! Terminal formatting for selector output.
//!
//! Every command prints through these helpers so colors and spacing stay
//! consistent: errors in red, chosen values in blue, option indices and
//! prompts in bright_black.
//!
//! The `format_*` functions return colored strings; [`strip_ansi_codes`]
//! removes the escape sequences again for tests and `--json`-free piping.

use crate::core::response::ResolvedSelection;
use crate::core::selector::{HierarchicalSelector, LevelView};
use colored::*;
use std::fmt::Write;

/// Prints `✕ Error: <message>` surrounded by blank lines.
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints `✓ <message>` after a blank line.
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Header line for a level: `Level 2 · Select Game Version: 1.21`.
pub fn format_level_header(view: &LevelView<'_>) -> String {
    let mut line = String::with_capacity(32 + view.message.len());
    let _ = write!(line, "{}", format!("Level {}", view.index + 1).bright_black());

    if !view.message.is_empty() {
        let _ = write!(line, " {} {}", "·".bright_black(), view.message.white());
    }

    match view.selected {
        Some(value) => {
            let _ = write!(line, "{} {}", ":".bright_black(), value.blue());
        }
        None => {
            let _ = write!(line, "{}", ":".bright_black());
        }
    }
    line
}

/// One numbered option line: `   [3] paper`.
pub fn format_option_line(n: usize, option: &str) -> String {
    format!(
        "   {}{}{} {}",
        "[".bright_black(),
        n.to_string().white(),
        "]".bright_black(),
        option
    )
}

pub fn format_resolved(resolved: &ResolvedSelection) -> String {
    format!("{} {}", "Resolved:".green(), resolved.summary().white())
}

/// Full listing of the selector: a header per visible level and the options
/// of the level still waiting for a choice.
pub fn render_levels(selector: &HierarchicalSelector) -> Vec<String> {
    let mut lines = Vec::new();

    for view in selector.levels() {
        lines.push(format_level_header(&view));
        if view.selected.is_none() {
            for (i, option) in view.options.iter().enumerate() {
                lines.push(format_option_line(i + 1, option));
            }
        }
    }

    if let Some(resolved) = selector.resolved() {
        lines.push(format_resolved(resolved));
    }

    lines
}

/// [`render_levels`] without color codes.
pub fn render_plain(selector: &HierarchicalSelector) -> Vec<String> {
    render_levels(selector)
        .iter()
        .map(|line| strip_ansi_codes(line))
        .collect()
}

pub fn print_levels(selector: &HierarchicalSelector) {
    println!();
    for line in render_levels(selector) {
        println!("{line}");
    }
    println!();
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
