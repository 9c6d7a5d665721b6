//! Apply command - run every selection and export the cleaned CSV.

use std::path::PathBuf;

use colored::Colorize;
use refinery::{ChoiceStore, RefineryConfig, Session};

pub fn run(
    file: PathBuf,
    choices: Option<PathBuf>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    super::ensure_exists(&file)?;
    let choices_file = super::resolve_choices(&file, choices);

    let session = Session::open(&file, RefineryConfig::default())?
        .with_choices(ChoiceStore::load_or_default(&choices_file)?);

    if !quiet {
        println!(
            "{} {} actions on {} columns from {}",
            "Applying".cyan().bold(),
            session.choices().action_count(),
            session.choices().len(),
            choices_file.display().to_string().white()
        );
    }

    let target = output.unwrap_or_else(|| session.default_export_path());
    let (outcome, path) = session.export(&target)?;

    for diagnostic in &outcome.diagnostics {
        eprintln!("{} {}", "Warning:".yellow().bold(), diagnostic);
    }

    if quiet {
        return Ok(());
    }

    for change in &outcome.changes {
        println!("  {} {}", "✓".green(), change.description);
    }

    println!();
    println!(
        "{} values changed, {} rows removed, {} skipped",
        outcome.values_changed().to_string().white().bold(),
        outcome.rows_removed().to_string().white().bold(),
        outcome.diagnostics.len().to_string().yellow()
    );
    println!(
        "{} {} ({} rows, {} columns)",
        "Exported".green().bold(),
        path.display().to_string().white(),
        outcome.table.row_count(),
        outcome.table.column_count()
    );

    Ok(())
}
