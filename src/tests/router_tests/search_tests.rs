use crate::router::handle;
use crate::tests::utils::{body_string, get, header, state_with, FailingSource, StaticSource};
use serde_json::json;

#[test]
fn known_code_redirects_to_details() {
    let state = state_with(StaticSource::with("CB156", json!({ "id": "CB156" })));

    let resp = handle(get("/search?code=CB156"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/details?property_id=CB156");
}

#[test]
fn code_is_trimmed_before_lookup() {
    let state = state_with(StaticSource::with("CB156", json!({ "id": "CB156" })));

    let resp = handle(get("/search?code=%20CB156%20"), &state).expect("Handler failed");

    assert_eq!(header(&resp, "Location"), "/details?property_id=CB156");
}

#[test]
fn unknown_code_shows_popup() {
    let state = state_with(StaticSource::default());

    let resp = handle(get("/search?code=NOPE"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("No property found with the provided code"));
    assert!(body.contains(r#"value="NOPE""#));
}

#[test]
fn lookup_failure_shows_error_popup() {
    let state = state_with(FailingSource);

    let resp = handle(get("/search?code=CB156"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("An error occurred while searching"));
}

#[test]
fn empty_code_just_shows_form() {
    let state = state_with(FailingSource);

    let resp = handle(get("/search?code=++"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"action="/search""#));
    assert!(!body.contains("popup-overlay"));
}

#[test]
fn home_and_stylesheet_are_served() {
    let state = state_with(StaticSource::default());

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Enter the property code"));

    let resp = handle(get("/static/main.css"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = state_with(StaticSource::default());

    match handle(get("/nowhere"), &state) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    }
}
