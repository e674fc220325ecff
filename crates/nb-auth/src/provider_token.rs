use serde::Deserialize;

/// Token bundle returned by the signInWithPassword and signUp operations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderToken {
    /// Bearer credential for follow-up provider and storage calls.
    pub id_token: String,
    /// Provider-side account id.
    pub local_id: String,
    pub email: String,
}
