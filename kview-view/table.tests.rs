use crate::{Link, Text};

use super::*;

#[test]
fn add_row_test() {
    let mut table = Table::new("Pods", TableCol::from_names(&["Name", "Ready"]));
    assert!(table.is_empty());

    table
        .add(TableRow::new().with("Name", Link::new("", "pod", "/pod")).with("Ready", Text::new("1/2")))
        .unwrap();
    table.add(TableRow::new().with("Name", Text::new("partial"))).unwrap();

    assert_eq!(2, table.rows.len());
    assert_eq!(Some(&Component::Text(Text::new("1/2"))), table.rows[0].get("Ready"));
    assert_eq!(None, table.rows[1].get("Ready"));
}

#[test]
fn add_row_unknown_column_test() {
    let mut table = Table::new("Pods", TableCol::from_names(&["Name"]));
    let row = TableRow::new().with("Name", Text::new("pod")).with("Node", Text::new("node"));

    assert_eq!(Err(ViewError::UnknownColumn("Node".to_owned())), table.add(row));
    assert!(table.is_empty());
}

#[test]
fn with_opt_test() {
    let row = TableRow::new()
        .with_opt("Name", Some(Text::new("pod")))
        .with_opt("Age", None::<Text>);

    assert_eq!(1, row.len());
    assert_eq!(vec!["Name"], row.columns().collect::<Vec<_>>());
}
