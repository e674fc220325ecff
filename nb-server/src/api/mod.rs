pub mod error;
pub mod extractors;
pub mod message_response;
pub mod notes;
pub mod usage;
