use crate::AuthState;

#[test]
fn test_auth_state_as_str() {
    assert_eq!(AuthState::Anonymous.as_str(), "anonymous");
    assert_eq!(AuthState::PendingVerification.as_str(), "pending_verification");
    assert_eq!(AuthState::Authenticated.as_str(), "authenticated");
}

#[test]
fn test_auth_state_default_is_anonymous() {
    assert_eq!(AuthState::default(), AuthState::Anonymous);
}

#[test]
fn test_only_authenticated_counts_as_authenticated() {
    assert!(AuthState::Authenticated.is_authenticated());
    assert!(!AuthState::Anonymous.is_authenticated());
    assert!(!AuthState::PendingVerification.is_authenticated());
}
