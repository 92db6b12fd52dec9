pub mod file_size;
pub mod item_id;

pub use file_size::FileSizeUtils;
pub use item_id::ItemId;
