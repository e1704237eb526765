use crate::listing::FilterPagePolicy;
use crate::router::handle;
use crate::tests::utils::{app_state, body_string, sample_properties, Call, FakeListingSource};
use astra::Body;
use http::{Method, Request};
use crate::errors::ServerError;
use scraper::{Html, Selector};
use std::sync::Arc;

fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn detail_route_fetches_by_id() {
    let source = Arc::new(FakeListingSource::with_properties(sample_properties(8)));
    let state = app_state(source.clone(), FilterPagePolicy::KeepPage);

    let resp = handle(get("/properties/p8"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Residence 8"));
    assert!(body.contains("8 Station Road, Delhi 411008"));
    assert!(body.contains("₹ 8,000,000"));
    assert!(body.contains("Listed on: 3/5/2024"));
    assert!(body.contains("APARTMENT"));

    assert_eq!(source.calls(), vec![Call::Property("p8".into())]);
}

#[test]
fn missing_property_renders_error_placeholder() {
    let source = Arc::new(FakeListingSource::with_properties(sample_properties(2)));
    let state = app_state(source, FilterPagePolicy::KeepPage);

    let resp = handle(get("/properties/nope"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Failed to load properties"));
}

#[test]
fn service_failure_renders_error_placeholder() {
    let source = Arc::new(FakeListingSource::failing());
    let state = app_state(source, FilterPagePolicy::KeepPage);

    let resp = handle(get("/properties/p1"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Failed to load properties"));
}

#[test]
fn detail_id_is_percent_decoded() {
    let mut properties = sample_properties(1);
    properties[0].id = "a b".into();
    let source = Arc::new(FakeListingSource::with_properties(properties));
    let state = app_state(source.clone(), FilterPagePolicy::KeepPage);

    let resp = handle(get("/properties/a%20b"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(source.calls(), vec![Call::Property("a b".into())]);

    let result = handle(get("/properties/%FF"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn card_links_to_encoded_detail_path() {
    let mut properties = sample_properties(1);
    properties[0].id = "a b".into();
    let source = Arc::new(FakeListingSource::with_properties(properties));
    let state = app_state(source, FilterPagePolicy::KeepPage);
    state.list.load();

    let body = body_string(handle(get("/"), &state).unwrap());
    let doc = Html::parse_document(&body);
    let sel = Selector::parse(".property-card a[href^='/properties/']").unwrap();
    let href = doc
        .select(&sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap()
        .to_string();

    assert_eq!(href, "/properties/a%20b");
}
