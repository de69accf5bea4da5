//! Entry command handlers.
//!
//! Every handler takes the store and the console explicitly and returns to
//! the caller when its screen is done; the main menu is always next.

mod add;
mod delete;
mod list;
mod search;
mod show;

pub use add::handle_add;
pub use delete::handle_delete_all;
pub use list::handle_list;
pub use search::handle_search;
