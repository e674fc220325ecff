pub mod account_info;
pub mod api_key;
pub mod error;
pub mod provider;
pub mod provider_token;
pub mod session;
pub mod session_store;

pub use account_info::AccountInfo;
pub use api_key::generate_api_key;
pub use error::{ProviderError, Result};
pub use provider::IdentityProvider;
pub use provider_token::ProviderToken;
pub use session::{SESSION_COOKIE, Session};
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
