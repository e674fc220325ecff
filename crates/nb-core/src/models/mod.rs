pub mod auth_state;
pub mod note;
pub mod user;
