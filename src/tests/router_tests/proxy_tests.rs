use crate::config::UpstreamConfig;
use crate::router::handle;
use crate::tests::utils::{
    body_string, fake_upstream, get, header, state_with, state_with_upstream, StaticSource,
};

fn upstream(base: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: Some(base.to_string()),
        endpoint: Some("/v1/properties".to_string()),
        expand: Some("images".to_string()),
        token: Some("secret-token".to_string()),
    }
}

#[test]
fn missing_settings_answer_500() {
    let state = state_with(StaticSource::default());

    let resp = handle(get("/api/properties/CB156"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 500);
    assert_eq!(
        body_string(resp),
        r#"{"error":"Server API is not fully configured"}"#
    );
}

#[test]
fn forwards_with_bearer_token_and_passes_response_through() {
    let (base, seen) = fake_upstream(200, "application/json", r#"{"id":"CB156"}"#);
    let state = state_with_upstream(StaticSource::default(), upstream(&base));

    let resp = handle(get("/api/properties/CB156"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "application/json");
    assert_eq!(body_string(resp), r#"{"id":"CB156"}"#);

    let captured = seen.recv().unwrap();
    assert_eq!(
        captured.request_line,
        "GET /v1/properties/CB156?expand=images HTTP/1.1"
    );
    assert_eq!(captured.authorization.as_deref(), Some("Bearer secret-token"));
}

#[test]
fn upstream_status_is_kept() {
    let (base, _seen) = fake_upstream(404, "application/problem+json", r#"{"detail":"gone"}"#);
    let state = state_with_upstream(StaticSource::default(), upstream(&base));

    let resp = handle(get("/api/properties/XX1"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 404);
    assert_eq!(header(&resp, "Content-Type"), "application/problem+json");
    assert_eq!(body_string(resp), r#"{"detail":"gone"}"#);
}

#[test]
fn unusable_base_url_reports_fetch_failure() {
    let state = state_with_upstream(StaticSource::default(), upstream("not a url"));

    let resp = handle(get("/api/properties/CB156"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 500);
    assert_eq!(body_string(resp), r#"{"error":"Failed to fetch property"}"#);
}
