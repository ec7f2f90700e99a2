use crate::core::{
    command_init::{CommandInit, Overrides},
    error::{Result, SelectorError},
    output::format_resolved,
    print_success,
    selector::HierarchicalSelector,
};

pub fn execute_resolve(overrides: &Overrides, segments: Vec<String>, json: bool) -> Result<()> {
    let mut ctx = CommandInit::initialize(overrides)?;
    let mut selector = ctx.selector();
    ctx.walk(&mut selector, &segments)?;

    if selector.resolved().is_none() {
        let level = selector.path().len();
        return Err(SelectorError::unresolved(
            selector.path().to_string(),
            selector.level_message(level),
        ));
    }

    print_resolution(&selector, json)?;
    ctx.record(&selector);
    Ok(())
}

/// Print the resolved selection, as pretty JSON or as a one-line summary.
pub(crate) fn print_resolution(selector: &HierarchicalSelector, json: bool) -> Result<()> {
    let Some(resolved) = selector.resolved() else {
        return Ok(());
    };

    if json {
        println!("{}", resolved.to_json_pretty()?);
    } else {
        println!("\n{}", format_resolved(resolved));
        print_success(&format!("Selected {}", selector.path()));
        println!();
    }
    Ok(())
}
