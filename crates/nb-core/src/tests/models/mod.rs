mod auth_state;
mod user;
