pub mod auth;
pub mod error;
pub mod messages;
pub mod notes;
pub mod session;
pub mod settings;
