pub mod format;
pub mod image;
pub mod storage_key;
