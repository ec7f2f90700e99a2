use crate::core::{
    command_init::Overrides,
    config::{SelectorConfig, API_URL_ENV},
    error::Result,
    print_section_header, print_success,
};
use colored::*;

/// Show the effective configuration; persist any values given on the command line.
pub fn execute_config(overrides: &Overrides, timeout_secs: Option<u64>) -> Result<()> {
    let changed = overrides.api_url.is_some() || overrides.resource_root.is_some() || timeout_secs.is_some();

    let mut stored = SelectorConfig::load_or_create()?;
    if changed {
        stored = stored.with_overrides(overrides.api_url.clone(), overrides.resource_root.clone());
        if let Some(timeout) = timeout_secs {
            stored.timeout_secs = timeout;
        }
        stored.save()?;
        print_success(&format!(
            "Saved configuration to {}",
            SelectorConfig::config_file()?.display()
        ));
    }

    let effective = stored
        .with_env_overrides()
        .with_overrides(overrides.api_url.clone(), overrides.resource_root.clone());

    print_section_header("Configuration");
    print_setting("api_base_url", &effective.api_base_url);
    print_setting("resource_root", &effective.resource_root);
    print_setting("refresh_path", &effective.refresh_path);
    print_setting("timeout_secs", &effective.timeout_secs.to_string());

    let from_env = std::env::var(API_URL_ENV).is_ok_and(|v| !v.trim().is_empty());
    if from_env && overrides.api_url.is_none() {
        println!("\n   {}", format!("api_base_url taken from {API_URL_ENV}").bright_black());
    }
    println!();

    Ok(())
}

fn print_setting(name: &str, value: &str) {
    println!("   {} {}", format!("{name}:").bright_black(), value.white());
}
