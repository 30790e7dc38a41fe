//! Plain-text tables built from column definitions.

use roster_business::table::{ColumnDef, ColumnKind};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Renders `rows` through `columns`, skipping the row-action column.
pub fn column_table<R>(columns: &[ColumnDef<R>], rows: &[&R]) -> String {
    let shown: Vec<&ColumnDef<R>> = columns
        .iter()
        .filter(|column| !matches!(column.kind, ColumnKind::Actions))
        .collect();

    let mut builder = Builder::default();
    builder.push_record(shown.iter().map(|column| column.title));
    for row in rows {
        builder.push_record(shown.iter().map(|column| column.display_text(row)));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
