mod error;
mod notes;
