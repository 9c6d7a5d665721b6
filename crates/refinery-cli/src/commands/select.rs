//! Select command - set a column's actions and preview the effect.

use std::path::PathBuf;

use colored::Colorize;
use refinery::{Action, Cell, ChoiceStore, ColumnPreview, RefineryConfig, Session};

/// Rows shown in the before/after preview.
const PREVIEW_ROWS: usize = 10;

pub fn run(
    file: PathBuf,
    choices: Option<PathBuf>,
    column: String,
    actions: Vec<Action>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    super::ensure_exists(&file)?;
    let choices_file = super::resolve_choices(&file, choices);

    let mut session = Session::open(&file, RefineryConfig::default())?
        .with_choices(ChoiceStore::load_or_default(&choices_file)?);

    if session.table().column(&column).is_none() {
        eprintln!(
            "{} column '{}' does not exist in {}; the selection will be ignored",
            "Warning:".yellow().bold(),
            column,
            file.display()
        );
    }

    let preview = session.select(&column, actions);
    session.choices().save(&choices_file)?;

    if quiet {
        return Ok(());
    }

    let selected = session.choices().get(&column);
    if selected.is_empty() {
        println!("{} selection for '{}'", "Cleared".green().bold(), column);
    } else {
        let names: Vec<&str> = selected.iter().map(|a| a.name()).collect();
        println!(
            "{} '{}': {}",
            "Selected".green().bold(),
            column,
            names.join(" -> ").white()
        );
    }
    println!(
        "{} {}",
        "Saved to".green().bold(),
        choices_file.display().to_string().white()
    );

    print_preview(&preview);
    Ok(())
}

fn print_preview(preview: &ColumnPreview) {
    let Some(before) = &preview.before else {
        return;
    };

    for diagnostic in &preview.diagnostics {
        println!("{} {}", "Warning:".yellow().bold(), diagnostic);
    }

    println!();
    let Some(after) = &preview.after else {
        println!("{}", "Column will be deleted".red());
        return;
    };

    println!(
        "  {:>5}  {:24} {}",
        "row".dimmed(),
        format!("before ({})", before.kind.label()).bold(),
        format!("after ({})", after.kind.label()).bold()
    );

    let shown = before.len().max(after.len()).min(PREVIEW_ROWS);
    for row in 0..shown {
        let old = display_cell(before.cells.get(row));
        let new = display_cell(after.cells.get(row));
        let new = if old == new { new.normal() } else { new.cyan() };
        println!("  {:>5}  {:24} {}", row, old, new);
    }
    if before.len() > PREVIEW_ROWS {
        println!("  {}", format!("... {} more rows", before.len() - PREVIEW_ROWS).dimmed());
    }
}

fn display_cell(cell: Option<&Cell>) -> String {
    match cell {
        None => String::new(),
        Some(Cell::Missing) => "<missing>".to_string(),
        Some(cell) => cell.to_string(),
    }
}
