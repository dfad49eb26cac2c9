//! # Company Table
//!
//! A small column-oriented view over company rows as handed over by a data
//! provider. Cells are plain `serde_json::Value`s so arbitrary pass-through
//! columns survive untouched.
//!
//! - The schema is the ordered `columns` list; a row may omit a cell (read as null).
//! - Derived columns are appended with [`CompanyTable::with_column`].
//! - Cell coercion never fails: see [`flag`], [`money`] and [`text`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One company record: column name → cell.
pub type Row = Map<String, Value>;

/// Ordered schema plus rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl CompanyTable {
    /// Empty table with the given schema.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for c in columns {
            let c = c.into();
            if !table.columns.contains(&c) {
                table.columns.push(c);
            }
        }
        table
    }

    /// Build a table from rows; the schema is the union of keys in first-seen order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for k in row.keys() {
                if !columns.contains(k) {
                    columns.push(k.clone());
                }
            }
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Append a row; keys outside the schema are added as new columns.
    pub fn push_row(&mut self, row: Row) {
        for k in row.keys() {
            if !self.has_column(k) {
                self.columns.push(k.clone());
            }
        }
        self.rows.push(row);
    }

    /// Cell lookup; `None` for out-of-range rows and for cells the row omits.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Set (or overwrite) a column from one value per row.
    ///
    /// Extra values are ignored; missing ones leave the cell out (null).
    pub fn with_column<I>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        for (row, v) in self.rows.iter_mut().zip(values) {
            row.insert(name.to_string(), v);
        }
    }

    /// Remove a column from the schema and every row. No-op if absent.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|c| c != name);
        for row in &mut self.rows {
            row.remove(name);
        }
    }

    /// Coerced numeric column (missing/unparseable cells read as 0.0).
    pub fn money_column(&self, name: &str) -> Vec<f64> {
        self.rows.iter().map(|r| money(r.get(name))).collect()
    }
}

/// Boolean-like coercion used for validation flags.
///
/// Strings are read case-insensitively: `true`, `t`, `yes`, `y`, `1` are true,
/// anything else is false. Null/missing is false.
pub fn flag(cell: Option<&Value>) -> bool {
    match cell {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "t" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

/// Monetary/numeric coercion: missing, null, NaN or unparseable → 0.0.
pub fn money(cell: Option<&Value>) -> f64 {
    let x = match cell {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Text coercion: null/missing is absent, scalars use their display form.
pub fn text(cell: Option<&Value>) -> Option<String> {
    match cell {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    }
}
