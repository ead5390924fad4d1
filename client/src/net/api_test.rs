use super::*;

// =============================================================
// build_url
// =============================================================

#[test]
fn build_url_joins_with_single_slash() {
    assert_eq!(
        build_url("http://localhost:8000", "/users/login"),
        "http://localhost:8000/users/login"
    );
    assert_eq!(
        build_url("http://localhost:8000/", "users/login"),
        "http://localhost:8000/users/login"
    );
    assert_eq!(
        build_url("http://localhost:8000//", "//users/register"),
        "http://localhost:8000/users/register"
    );
}

#[test]
fn build_url_keeps_base_path_prefix() {
    assert_eq!(
        build_url("https://api.codeplan.test/v1", "/users/login"),
        "https://api.codeplan.test/v1/users/login"
    );
}

#[test]
fn build_url_with_blank_base_returns_path() {
    assert_eq!(build_url("", "/users/login"), "/users/login");
    assert_eq!(build_url("   ", " /users/login "), "/users/login");
}

// =============================================================
// sanitize_body
// =============================================================

#[test]
fn sanitize_body_trims_whitespace() {
    assert_eq!(sanitize_body("  {\"ok\":true}\n"), "{\"ok\":true}");
}

#[test]
fn sanitize_body_marks_empty_bodies() {
    assert_eq!(sanitize_body(""), "<empty body>");
    assert_eq!(sanitize_body(" \n\t"), "<empty body>");
}

#[test]
fn sanitize_body_truncates_long_bodies() {
    let long = "x".repeat(500);
    assert_eq!(sanitize_body(&long).chars().count(), MAX_LOGGED_BODY_CHARS);
}

#[test]
fn sanitize_body_truncates_on_char_boundaries() {
    let long = "é".repeat(300);
    let out = sanitize_body(&long);
    assert_eq!(out.chars().count(), MAX_LOGGED_BODY_CHARS);
    assert!(out.chars().all(|c| c == 'é'));
}

// =============================================================
// post_json outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn post_json_is_unavailable_without_browser() {
    let result = futures::executor::block_on(post_json(
        "http://localhost:8000/users/login",
        &serde_json::json!({ "email": "a@b.c" }),
    ));
    assert_eq!(result, Err(ApiError::Unavailable));
}
