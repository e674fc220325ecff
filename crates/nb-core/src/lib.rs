pub mod models;

#[cfg(test)]
mod tests;

pub use models::auth_state::AuthState;
pub use models::note::Note;
pub use models::user::User;
