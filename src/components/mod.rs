//! UI Components
//!
//! Presentation shells over the store.

mod add_item_form;
mod item_row;
mod list_actions;
mod logo;
mod packing_list;
mod stats;

pub use add_item_form::AddItemForm;
pub use item_row::ItemRow;
pub use list_actions::ListActions;
pub use logo::Logo;
pub use packing_list::PackingList;
pub use stats::StatsFooter;
