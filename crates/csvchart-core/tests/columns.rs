// File: crates/csvchart-core/tests/columns.rs
// Purpose: Column resolution with positional fallback per axis.

use csvchart_core::{resolve_columns, AxisRole, ChartError, Table};

fn table(headers: &[&str]) -> Table {
    Table::new(headers.iter().map(|h| h.to_string()).collect(), Vec::new())
}

#[test]
fn explicit_names_win() {
    let t = table(&["h0", "h1", "h2"]);
    let cols = resolve_columns(&t, Some("h2"), Some("h0")).unwrap();
    assert_eq!((cols.x.as_str(), cols.y.as_str()), ("h2", "h0"));
}

#[test]
fn absent_names_use_positions() {
    let t = table(&["h0", "h1", "h2"]);
    let cols = resolve_columns(&t, None, None).unwrap();
    assert_eq!((cols.x.as_str(), cols.y.as_str()), ("h0", "h1"));
}

#[test]
fn unknown_name_falls_back_without_error() {
    let t = table(&["h0", "h1", "h2"]);
    let cols = resolve_columns(&t, Some("bogus"), Some("h2")).unwrap();
    assert_eq!(cols.x, "h0");
    assert_eq!(cols.y, "h2");
}

#[test]
fn blank_names_are_treated_as_absent() {
    let t = table(&["h0", "h1"]);
    let cols = resolve_columns(&t, Some("   "), Some("")).unwrap();
    assert_eq!((cols.x.as_str(), cols.y.as_str()), ("h0", "h1"));
}

#[test]
fn single_column_cannot_supply_y() {
    let t = table(&["only"]);
    let err = resolve_columns(&t, None, None).unwrap_err();
    match err {
        ChartError::ColumnResolution { axis, index, available } => {
            assert_eq!(axis, AxisRole::Y);
            assert_eq!(index, 1);
            assert_eq!(available, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn no_columns_fails_on_x() {
    let t = table(&[]);
    let err = resolve_columns(&t, Some("a"), Some("b")).unwrap_err();
    assert!(matches!(err, ChartError::ColumnResolution { axis: AxisRole::X, .. }));
}
