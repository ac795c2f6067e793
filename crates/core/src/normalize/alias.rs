//! Column alias resolution
//!
//! Source sheets name the same column many ways (`"Date"`, `"التاريخ"`,
//! `"تاريخ باليوم"`). The resolver looks a canonical field up through the
//! injected [`ColumnAliasTable`] and returns the first usable cell.

use opsboard_domain::{CellValue, ColumnAliasTable, RawRow};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Cell under the first label that is present with a non-empty value
///
/// A label is tried verbatim and then trimmed, so `" VIP "` in a table
/// still finds a `"VIP"` column. Numeric zero is a usable value; missing
/// cells and text that is empty once trimmed are skipped.
pub fn pick_by_aliases<'r, S: AsRef<str>>(row: &'r RawRow, labels: &[S]) -> &'r CellValue {
    labels
        .iter()
        .find_map(|label| {
            let label = label.as_ref();
            usable(row.get(label)).or_else(|| usable(row.get(label.trim())))
        })
        .unwrap_or(&EMPTY_CELL)
}

fn usable(cell: Option<&CellValue>) -> Option<&CellValue> {
    cell.filter(|value| !value.is_blank())
}

/// Canonical-field lookups over one alias table
#[derive(Debug, Clone, Copy)]
pub struct AliasResolver<'a> {
    table: &'a ColumnAliasTable,
}

impl<'a> AliasResolver<'a> {
    pub fn new(table: &'a ColumnAliasTable) -> Self {
        Self { table }
    }

    /// Value of `field` in `row`, or an empty cell for unknown fields and
    /// rows that carry none of the field's labels
    pub fn resolve<'r>(&self, row: &'r RawRow, field: &str) -> &'r CellValue {
        pick_by_aliases(row, self.table.labels(field))
    }

    pub fn table(&self) -> &'a ColumnAliasTable {
        self.table
    }
}
