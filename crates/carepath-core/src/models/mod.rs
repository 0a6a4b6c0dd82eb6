pub mod entry;
pub mod role;
pub mod screen_id;
pub mod selection;
