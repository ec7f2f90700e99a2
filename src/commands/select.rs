use crate::commands::resolve::print_resolution;
use crate::core::{
    choice_parser::{Choice, ChoiceParser},
    command_init::{CommandInit, Overrides, SelectorContext},
    error::{Result, SelectorError},
    print_error, print_levels,
    selector::HierarchicalSelector,
};
use colored::*;
use std::io::{self, BufRead, Write};

pub fn execute_select(overrides: &Overrides, segments: Vec<String>, json: bool) -> Result<()> {
    let mut ctx = CommandInit::initialize(overrides)?;
    let mut selector = ctx.selector();
    ctx.walk(&mut selector, &segments)?;

    let stdin = io::stdin();
    run_selection(&mut ctx, &mut selector, stdin.lock())?;

    print_resolution(&selector, json)?;
    ctx.record(&selector);
    Ok(())
}

/// Prompt for choices on `input` until the path resolves.
///
/// End of input before resolution cancels the selection.
pub fn run_selection<R: BufRead>(
    ctx: &mut SelectorContext,
    selector: &mut HierarchicalSelector,
    mut input: R,
) -> Result<()> {
    while selector.resolved().is_none() {
        print_levels(selector);
        print!("{} ", "Choose [N | L:V | b | q]:".blue());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SelectorError::Canceled);
        }

        let (level, value) = match ChoiceParser::parse(&line, selector) {
            Ok(Choice::Change { level, value }) => (level, value),
            Ok(Choice::Quit) => return Err(SelectorError::Canceled),
            Err(e) => {
                print_error(&e.to_string());
                continue;
            }
        };

        selector.on_level_change(level, &value)?;
        if let Err(e) = ctx.load_current(selector) {
            step_back(ctx, selector, e)?;
        }
    }

    Ok(())
}

/// Report a failed level and return to its parent. A failed root is fatal.
fn step_back(
    ctx: &mut SelectorContext,
    selector: &mut HierarchicalSelector,
    error: SelectorError,
) -> Result<()> {
    let depth = selector.path().len();
    if depth == 0 {
        return Err(error);
    }

    print_error(&error.to_string());
    log::debug!("Stepping back from '{}'", selector.path());
    selector.on_level_change(depth - 1, "")?;
    ctx.load_current(selector)
}
