mod directory;
mod ops;

pub use directory::{
    is_directory, list_directory, list_entries, parent_of, search_by_name, search_directory,
};
pub use ops::{copy_entry, move_entry, open_in_system, remove_entry, rename_entry};
