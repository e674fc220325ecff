use serde::Deserialize;

/// Subset of the accounts:lookup response the server cares about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub email: String,
    /// False until the account clicks the verification link.
    #[serde(default)]
    pub email_verified: bool,
}
