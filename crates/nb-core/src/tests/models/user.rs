use crate::models::user::display_name_of;
use crate::User;

#[test]
fn test_display_name_is_local_part_of_email() {
    assert_eq!(display_name_of("anna@example.com"), "anna");
    assert_eq!(display_name_of("jan.kowalski@poczta.pl"), "jan.kowalski");
}

#[test]
fn test_display_name_without_at_sign_is_whole_string() {
    assert_eq!(display_name_of("not-an-email"), "not-an-email");
}

#[test]
fn test_user_display_name_uses_email() {
    let user = User {
        id: 1,
        email: "anna@example.com".to_string(),
        api_key: "00112233445566778899aabbccddeeff".to_string(),
        total_requests: 0,
        last_request_at: None,
    };

    assert_eq!(user.display_name(), "anna");
}
