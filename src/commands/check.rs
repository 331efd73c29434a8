//! The `check` command: preview how a payload config parses.

use crate::cli::CheckArgs;
use crate::config::TaskConfig;
use crate::error::Result;
use crate::request::LaunchRequestBuilder;
use std::collections::BTreeMap;

/// Print a human-readable breakdown of the parsed payload config.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = TaskConfig::load(&args.config)?;

    let request = LaunchRequestBuilder::new().build(
        &config.uri,
        &config.command_line_args,
        &config.environment_properties,
        &config.deployment_properties,
    );

    println!("Launch request preview for '{}':", args.config.display());
    println!();
    println!("  Location:   {}", request.location);
    println!();

    println!("  Arguments ({}):", request.arguments.len());
    if request.arguments.is_empty() {
        println!("    (none)");
    }
    for argument in &request.arguments {
        println!("    {}", argument);
    }
    println!();

    print_properties("Environment properties", &request.environment);
    print_properties("Deployment properties", &request.deployment);

    Ok(())
}

fn print_properties(label: &str, properties: &BTreeMap<String, String>) {
    println!("  {} ({}):", label, properties.len());
    if properties.is_empty() {
        println!("    (none)");
    }
    for (key, value) in properties {
        println!("    {} = {}", key, value);
    }
    println!();
}
