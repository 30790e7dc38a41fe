//! Table components of the user-general page.
//!
//! - `columns`: column sizing and display order
//! - `header`: sort toggles and filter menus
//! - `row`: one row with its action buttons
//! - `cells`: cell rendering per column kind

mod cells;
pub mod columns;
pub mod header;
pub mod row;

pub use cells::badge_color;
