use crate::router::handle;
use crate::tests::utils::{body_string, get, state_with, FailingSource, StaticSource};
use serde_json::json;

fn crystalline() -> StaticSource {
    StaticSource::with(
        "CB2042",
        json!({
            "data": {
                "PropertyCode": "CB2042",
                "Title": "The Crystalline",
                "suburb": { "name": "Camps Bay" },
                "bedrooms": "3",
                "description": "<p>Intro</p><ul><li>Pool</li></ul><p>After pool</p><p>LOCATION: on the beach</p>",
                "latitude": -33.95,
                "longitude": 18.38,
                "images": [{ "url": "/img/1.jpg" }]
            }
        }),
    )
}

#[test]
fn details_render_normalized_property() {
    let state = state_with(crystalline());

    let resp = handle(get("/details?property_id=CB2042"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("CB2042 - The Crystalline"));
    assert!(body.contains("Camps Bay"));
    assert!(body.contains("3 bedrooms"));
    assert!(body.contains(r#"src="/img/1.jpg""#));
    assert!(body.contains("<p>Intro</p><ul><li>Pool</li></ul>"));
    assert!(body.contains("<p>After pool</p>"));
    assert!(body.contains("LOCATION: on the beach"));
    assert!(body.contains("q=-33.95,18.38&amp;z=15&amp;output=embed"));
    assert!(body.contains("http://app.test/details?property_id=CB2042"));
}

#[test]
fn id_query_and_path_forms_resolve() {
    let state = state_with(crystalline());

    for uri in ["/details?id=CB2042", "/details/CB2042"] {
        let resp = handle(get(uri), &state).expect("Handler failed");
        assert_eq!(resp.status(), 200, "{uri}");
    }
}

#[test]
fn legacy_hash_is_resolved() {
    let state = state_with(crystalline());

    let resp = handle(get("/details?legacy_hash=%23property_id%3DCB2042"), &state)
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("The Crystalline"));
}

#[test]
fn unknown_property_is_404() {
    let state = state_with(StaticSource::default());

    let resp = handle(get("/details?property_id=NOPE"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Property not found"));
}

#[test]
fn missing_id_serves_hash_forwarder() {
    let state = state_with(StaticSource::default());

    let resp = handle(get("/details"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("legacy_hash="));
}

#[test]
fn lookup_failure_is_502() {
    let state = state_with(FailingSource);

    let resp = handle(get("/details?property_id=CB2042"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Failed to load property data"));
}
