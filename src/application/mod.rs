//! Application layer - Use cases and orchestration

pub mod add_note;
pub mod edit_note;
pub mod list_notes;
pub mod remove_note;
pub mod search_notes;
pub mod show_note;

pub use add_note::add_note;
pub use edit_note::edit_note;
pub use list_notes::list_notes;
pub use remove_note::remove_note;
pub use search_notes::search_notes;
pub use show_note::show_note;
