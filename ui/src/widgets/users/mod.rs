//! User-general page widgets.
//!
//! - `panel`: page state, polling and layout
//! - `search`: server-side search form
//! - `modals`: confirmation dialogs
//! - `toasts`: notification overlay
//! - `table`: table rendering

mod modals;
mod panel;
mod search;
pub mod table;
mod toasts;

pub use modals::{ModalChoice, show_confirmation};
pub use panel::UserGeneralPage;
pub use search::{SearchAction, render_search_form};
pub use toasts::render_toasts;
