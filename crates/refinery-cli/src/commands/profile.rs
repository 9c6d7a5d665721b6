//! Profile command - print one suggestion per column.

use std::path::PathBuf;

use colored::Colorize;
use refinery::{ColumnSummary, RefineryConfig, Session};
use serde::Serialize;

#[derive(Serialize)]
struct ProfileEntry<'a> {
    #[serde(flatten)]
    summary: &'a ColumnSummary,
    suggestion: Option<String>,
}

pub fn run(file: PathBuf, json: bool, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    super::ensure_exists(&file)?;

    let session = Session::open(&file, RefineryConfig::default())?;
    let summaries = session.summaries();

    if json {
        let entries: Vec<ProfileEntry> = summaries
            .iter()
            .map(|summary| ProfileEntry {
                summary,
                suggestion: summary.suggestion(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if !quiet {
        println!(
            "{} {} ({} rows, {} columns)",
            "Profiling".cyan().bold(),
            file.display().to_string().white(),
            session.table().row_count(),
            session.table().column_count()
        );
        println!();
    }

    let mut flagged = 0;
    for summary in &summaries {
        let suggestion = match summary.suggestion() {
            Some(s) => {
                flagged += 1;
                s.yellow().to_string()
            }
            None => "ok".green().to_string(),
        };
        println!(
            "  {:20} {:8} {:>6} missing  {}",
            summary.name.white().bold(),
            summary.kind.label(),
            summary.missing_count,
            suggestion
        );
    }

    if !quiet {
        println!();
        if flagged == 0 {
            println!("{}", "No suggestions - data looks clean!".green());
        } else {
            println!(
                "Run {} to choose actions",
                format!("refinery select {} --column <COLUMN> --action <ACTION>", file.display())
                    .cyan()
                    .bold()
            );
        }
    }

    Ok(())
}
