//! Actions command - list the action catalog.

use colored::Colorize;
use refinery::Action;
use serde::Serialize;

#[derive(Serialize)]
struct ActionEntry {
    name: &'static str,
    applies_to: &'static str,
    description: &'static str,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<ActionEntry> = Action::ALL
        .iter()
        .map(|a| ActionEntry {
            name: a.name(),
            applies_to: a.applicability().label(),
            description: a.description(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Available actions:".cyan().bold());
    println!();
    for entry in &entries {
        println!(
            "  {:22} {:8} {}",
            entry.name.white().bold(),
            entry.applies_to.dimmed(),
            entry.description
        );
    }

    Ok(())
}
