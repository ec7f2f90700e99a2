use crate::core::{
    command_init::{CommandInit, Overrides},
    error::Result,
    output::{format_option_line, format_resolved},
    print_info, print_section_header,
};

pub fn execute_options(overrides: &Overrides, segments: Vec<String>) -> Result<()> {
    let mut ctx = CommandInit::initialize(overrides)?;
    let mut selector = ctx.selector();
    ctx.walk(&mut selector, &segments)?;

    if let Some(resolved) = selector.resolved() {
        println!("\n{}\n", format_resolved(resolved));
        return Ok(());
    }

    let level = selector.path().len();
    let options = selector.level_options(level);
    if options.is_empty() {
        print_info(&format!("No options available at '{}'", selector.path()));
        return Ok(());
    }

    let header = match selector.level_message(level) {
        "" => format!("Options at '{}'", selector.path()),
        message => message.to_string(),
    };
    print_section_header(&header);
    for (i, option) in options.iter().enumerate() {
        println!("{}", format_option_line(i + 1, option));
    }
    println!();

    Ok(())
}
