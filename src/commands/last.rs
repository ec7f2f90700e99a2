use crate::core::{
    command_init::{CommandInit, Overrides},
    error::Result,
    output::format_resolved,
    print_section_header,
    state::load_last_selection,
};
use colored::*;

pub fn execute_last(overrides: &Overrides, json: bool) -> Result<()> {
    let config = CommandInit::effective_config(overrides)?;
    let last = load_last_selection(&config.api_base_url)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&last)?);
        return Ok(());
    }

    print_section_header("Last selection");
    println!("   {} {}", "API:".bright_black(), last.api_base_url.white());
    println!("   {} {}", "Path:".bright_black(), last.path.to_string().blue());
    println!(
        "   {} {}",
        "When:".bright_black(),
        last.resolved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().white()
    );
    println!("   {}\n", format_resolved(&last.resolved));

    Ok(())
}
