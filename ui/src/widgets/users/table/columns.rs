//! Column layout of the users table.

use egui_extras::Column;
use roster_business::table::{ColumnDef, FixedSide};

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Left-pinned columns are drawn first, then the rest in declaration order.
pub fn display_order<R>(columns: &[ColumnDef<R>]) -> Vec<&ColumnDef<R>> {
    let (fixed, rest): (Vec<_>, Vec<_>) = columns
        .iter()
        .partition(|column| column.fixed == Some(FixedSide::Left));
    let (right, middle): (Vec<_>, Vec<_>) = rest
        .into_iter()
        .partition(|column| column.fixed == Some(FixedSide::Right));
    fixed.into_iter().chain(middle).chain(right).collect()
}

/// egui column sizing for a column definition.
pub fn table_column<R>(column: &ColumnDef<R>) -> Column {
    match column.width {
        Some(width) => Column::exact(width),
        None => Column::auto().at_least(MIN_COLUMN_WIDTH).resizable(true),
    }
}
