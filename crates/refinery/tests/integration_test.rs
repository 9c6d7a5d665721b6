//! Integration tests for Refinery.

use std::io::Write;
use tempfile::NamedTempFile;

use refinery::{
    Action, Cell, ChoiceStore, ColumnKind, ColumnProfiler, DiagnosticKind, Parser, RefineryConfig,
    RefineryError, Session, TransformEngine, DEFAULT_EXPORT_FILE_NAME,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn parse(content: &str) -> refinery::Table {
    Parser::new().parse_str(content).expect("Parse failed")
}

// =============================================================================
// Profiling
// =============================================================================

#[test]
fn test_profile_numeric_with_missing() {
    let table = parse("age,id\n25,1\n,2\n40,3\n,4\n");
    assert_eq!(table.column("age").unwrap().kind, ColumnKind::Numeric);

    let suggestions = ColumnProfiler::profile(&table);
    assert_eq!(
        suggestions["age"],
        "2 missing values; choose: impute, substitute, or delete"
    );
    assert!(!suggestions.contains_key("id"));
}

#[test]
fn test_profile_text_mixed_and_missing() {
    let table = parse("status,id\nActive,1\n,2\n42,3\nactive,4\n");
    assert_eq!(table.column("status").unwrap().kind, ColumnKind::Text);

    let suggestions = ColumnProfiler::profile(&table);
    // The missing-values rule runs last and wins.
    assert_eq!(
        suggestions["status"],
        "1 missing values; choose: impute, substitute, or delete"
    );
}

#[test]
fn test_profile_keeps_column_order() {
    let table = parse("b,a,c\nX,Y,1\n");
    let suggestions = ColumnProfiler::profile(&table);
    let keys: Vec<&str> = suggestions.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

// =============================================================================
// Transformations
// =============================================================================

#[test]
fn test_impute_mean_scenario() {
    let table = parse("age,id\n25,1\n,2\n40,3\n,4\n");
    let choices = ChoiceStore::new().with("age", vec![Action::ImputeMean]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    let ages: Vec<Option<f64>> = outcome
        .table
        .column("age")
        .unwrap()
        .cells
        .iter()
        .map(Cell::as_number)
        .collect();
    assert_eq!(ages, vec![Some(25.0), Some(32.5), Some(40.0), Some(32.5)]);
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_lowercase_scenario() {
    let table = parse("status\nActive\nN/A\nactive\n");
    let choices = ChoiceStore::new().with("status", vec![Action::Lowercase]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    let status = outcome.table.column("status").unwrap();
    assert_eq!(
        status.cells,
        vec![Cell::text("active"), Cell::text("n/a"), Cell::text("active")]
    );
}

#[test]
fn test_to_numeric_scenario() {
    let table = parse("code\n12\nx3\n45\n");
    let choices = ChoiceStore::new().with("code", vec![Action::ToNumeric]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    let code = outcome.table.column("code").unwrap();
    assert_eq!(code.kind, ColumnKind::Numeric);
    assert_eq!(
        code.cells,
        vec![Cell::Number(12.0), Cell::Missing, Cell::Number(45.0)]
    );
}

#[test]
fn test_drop_duplicate_rows_scenario() {
    let table = parse("id,label\n1,a\n2,b\n2,c\n3,d\n");
    let choices = ChoiceStore::new().with("id", vec![Action::DropDuplicateRows]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    assert_eq!(outcome.table.row_count(), 3);
    assert_eq!(outcome.table.get(1, "label"), Some(&Cell::text("b")));
    assert_eq!(outcome.table.get(2, "label"), Some(&Cell::text("d")));
    assert_eq!(outcome.rows_removed(), 1);
}

#[test]
fn test_delete_then_lowercase_is_silent() {
    let table = parse("c,d\nA,1\n");
    let choices = ChoiceStore::new().with("c", vec![Action::DeleteColumn, Action::Lowercase]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    assert!(outcome.table.column("c").is_none());
    assert_eq!(outcome.table.column_names(), vec!["d"]);
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_type_mismatch_leaves_column_unchanged() {
    let table = parse("name,n\nAnn,1\nBo,2\n");
    let choices = ChoiceStore::new()
        .with("name", vec![Action::ImputeMean, Action::Normalize])
        .with("n", vec![Action::Lowercase]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    assert_eq!(outcome.diagnostics.len(), 3);
    assert!(outcome
        .diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::TypeMismatch));
    assert_eq!(outcome.table, table);
}

#[test]
fn test_missing_column_is_skipped() {
    let table = parse("a\n1\n");
    let choices = ChoiceStore::new().with("ghost", vec![Action::Lowercase]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    assert_eq!(outcome.table, table);
    assert!(outcome.changes.is_empty());
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_chained_cleaning() {
    let table = parse("score\n10\nn/a\n30\nNULL\n");
    assert_eq!(table.column("score").unwrap().kind, ColumnKind::Text);

    let choices = ChoiceStore::new().with(
        "score",
        vec![Action::MarkMissing, Action::ToNumeric, Action::ImputeMedian],
    );
    let outcome = TransformEngine::new().apply(&table, &choices);
    let score = outcome.table.column("score").unwrap();
    assert_eq!(score.kind, ColumnKind::Numeric);
    assert_eq!(
        score.cells,
        vec![
            Cell::Number(10.0),
            Cell::Number(20.0),
            Cell::Number(30.0),
            Cell::Number(20.0)
        ]
    );
}

#[test]
fn test_apply_does_not_mutate_input() {
    let table = parse("s,n\nA,1\nB,\n");
    let before = table.clone();
    let choices = ChoiceStore::new()
        .with("s", vec![Action::Lowercase, Action::DeleteColumn])
        .with("n", vec![Action::ImputeMean, Action::Standardize]);

    let _ = TransformEngine::new().apply(&table, &choices);
    assert_eq!(table, before);
}

// =============================================================================
// Sessions and Persistence
// =============================================================================

#[test]
fn test_session_round_trip_through_choices_file() {
    let data = create_test_file("status,age\nActive,25\nNA,\nactive,40\n");
    let dir = tempfile::tempdir().unwrap();
    let choices_file = dir.path().join("features.choices.json");

    let mut session = Session::open(data.path(), RefineryConfig::default()).unwrap();
    session.select("status", vec![Action::Lowercase, Action::ReplaceValues]);
    session.select("age", vec![Action::ImputeMean]);
    session.choices().save(&choices_file).unwrap();

    let restored = ChoiceStore::load(&choices_file).unwrap();
    assert_eq!(&restored, session.choices());

    let resumed = Session::open(data.path(), RefineryConfig::default())
        .unwrap()
        .with_choices(restored);
    let (outcome, path) = resumed.export(dir.path()).unwrap();

    assert_eq!(path, dir.path().join(DEFAULT_EXPORT_FILE_NAME));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "status,age\nactive,25\nna,32.5\nactive,40\n");
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_replace_values_before_lowercase() {
    let table = parse("status\nNA\nNaN\nOk\n");
    let choices = ChoiceStore::new().with("status", vec![Action::ReplaceValues, Action::Lowercase]);

    let outcome = TransformEngine::new().apply(&table, &choices);
    assert_eq!(
        outcome.table.column("status").unwrap().cells,
        vec![Cell::text("unknown"), Cell::text("unknown"), Cell::text("ok")]
    );
}

#[test]
fn test_export_writes_missing_as_empty() {
    let table = parse("a,b\n1,x\n,y\n");
    let csv = table.to_csv_string().unwrap();
    assert_eq!(csv, "a,b\n1,x\n,y\n");
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_open_missing_file() {
    let result = Session::open("/nonexistent/features.csv", RefineryConfig::default());
    assert!(matches!(result, Err(RefineryError::Io { .. })));
}

#[test]
fn test_open_header_only_file() {
    let file = create_test_file("a,b\n");
    let result = Session::open(file.path(), RefineryConfig::default());
    assert!(matches!(result, Err(RefineryError::EmptyData(_))));
}

#[test]
fn test_load_corrupt_choices() {
    let file = create_test_file("{ not json");
    assert!(ChoiceStore::load(file.path()).is_err());
}

#[test]
fn test_load_unknown_action_in_choices() {
    let file = create_test_file(
        r#"{"version":"1.0.0","updated_at":"2024-01-01T00:00:00Z","choices":{"c":["delete-rows"]}}"#,
    );
    assert!(ChoiceStore::load(file.path()).is_err());
}
