mod error;
mod session;
