use serde::Serialize;
use std::collections::BTreeMap;

use crate::{Component, ViewError};

#[cfg(test)]
#[path = "./table.tests.rs"]
mod table_tests;

/// Table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCol {
    pub name: String,
    pub accessor: String,
}

impl TableCol {
    /// Creates columns from names, the accessor is the same as the name.
    pub fn from_names(names: &[&str]) -> Vec<Self> {
        names
            .iter()
            .map(|name| Self {
                name: (*name).to_owned(),
                accessor: (*name).to_owned(),
            })
            .collect()
    }
}

/// Table row, cells keyed by the column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableRow(BTreeMap<String, Component>);

impl TableRow {
    /// Creates new empty [`TableRow`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets cell value for the `column`.
    pub fn with(mut self, column: &str, value: impl Into<Component>) -> Self {
        self.0.insert(column.to_owned(), value.into());
        self
    }

    /// Sets cell value for the `column` if the `value` is present.
    pub fn with_opt(self, column: &str, value: Option<impl Into<Component>>) -> Self {
        match value {
            Some(value) => self.with(column, value),
            None => self,
        }
    }

    /// Returns cell for the `column`.
    pub fn get(&self, column: &str) -> Option<&Component> {
        self.0.get(column)
    }

    /// Returns iterator over the row column names.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns number of cells in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Table with declared columns and rows in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<TableCol>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Creates new [`Table`] instance without rows.
    pub fn new(title: impl Into<String>, columns: Vec<TableCol>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Adds row to the table.\
    /// **Note** that every cell must belong to a declared column.
    pub fn add(&mut self, row: TableRow) -> Result<(), ViewError> {
        if let Some(unknown) = row.columns().find(|c| !self.columns.iter().any(|col| col.name == *c)) {
            return Err(ViewError::UnknownColumn(unknown.to_owned()));
        }

        self.rows.push(row);
        Ok(())
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
