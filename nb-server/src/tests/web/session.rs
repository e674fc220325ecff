use crate::web::session::{clear_session_cookie, cookie_value, session_cookie};

use axum::http::Request;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

fn parts_with_cookies(cookies: &[&str]) -> Parts {
    let mut builder = Request::builder().uri("/");
    for cookie in cookies {
        builder = builder.header(COOKIE, *cookie);
    }

    let (parts, _) = builder.body(()).unwrap().into_parts();
    parts
}

#[test]
fn test_cookie_value_finds_single_cookie() {
    let parts = parts_with_cookies(&["nb_session=abc123"]);

    assert_eq!(cookie_value(&parts, "nb_session").as_deref(), Some("abc123"));
}

#[test]
fn test_cookie_value_scans_multiple_pairs() {
    let parts = parts_with_cookies(&["theme=dark; nb_session=tok; lang=pl"]);

    assert_eq!(cookie_value(&parts, "nb_session").as_deref(), Some("tok"));
}

#[test]
fn test_cookie_value_scans_multiple_headers() {
    let parts = parts_with_cookies(&["theme=dark", "nb_session=tok"]);

    assert_eq!(cookie_value(&parts, "nb_session").as_deref(), Some("tok"));
}

#[test]
fn test_cookie_value_requires_exact_name() {
    let parts = parts_with_cookies(&["xnb_session=tok"]);

    assert_eq!(cookie_value(&parts, "nb_session"), None);
}

#[test]
fn test_cookie_value_without_cookie_header() {
    let parts = parts_with_cookies(&[]);

    assert_eq!(cookie_value(&parts, "nb_session"), None);
}

#[test]
fn test_session_cookie_attributes() {
    let cookie = session_cookie("tok", 86400);

    assert!(cookie.starts_with("nb_session=tok;"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=86400"));
}

#[test]
fn test_clear_session_cookie_expires_immediately() {
    let cookie = clear_session_cookie();

    assert!(cookie.starts_with("nb_session=;"));
    assert!(cookie.contains("Max-Age=0"));
}
