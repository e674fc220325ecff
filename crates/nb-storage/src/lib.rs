pub mod error;
pub mod object_storage;

pub use error::{Result, StorageError};
pub use object_storage::{ObjectStorage, profile_pic_key};
