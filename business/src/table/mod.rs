//! Table view model shared by every front end.

pub mod column;
pub mod state;

pub use column::{
    BadgeStatus, CellValue, ColumnDef, ColumnFilter, ColumnKind, EnumOption, FilterOption,
    FixedSide, sorted_tags, tag_label,
};
pub use state::{LoadTicket, SortOrder, SortState, TableState};
