use crate::api::PageQuery;
use crate::domain::PropertyType;
use crate::listing::FilterPagePolicy;
use crate::router::handle;
use crate::tests::utils::{app_state, body_string, sample_properties, FakeListingSource};
use astra::Body;
use http::{Method, Request};
use scraper::{Html, Selector};
use std::sync::Arc;

fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

fn count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

fn text_of(html: &str, selector: &str) -> String {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
}

fn loaded(count: usize) -> (Arc<FakeListingSource>, crate::state::AppState) {
    let source = Arc::new(FakeListingSource::with_properties(sample_properties(count)));
    let state = app_state(source.clone(), FilterPagePolicy::KeepPage);
    state.list.load();
    (source, state)
}

#[test]
fn list_renders_first_page_grid() {
    let (_, state) = loaded(14);

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(count(&body, ".property-card"), 6);
    assert_eq!(count(&body, ".pagination"), 1);
    assert_eq!(text_of(&body, ".page-label"), "Page 1 of 3");
    assert!(body.contains("Residence 1, Mumbai"));
    assert!(body.contains("₹ 1,000,000"));
}

#[test]
fn failed_initial_load_renders_error_placeholder_only() {
    let source = Arc::new(FakeListingSource::failing());
    let state = app_state(source, FilterPagePolicy::KeepPage);
    state.list.load();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("Failed to load properties"));
    assert_eq!(count(&body, ".property-card"), 0);
    assert_eq!(count(&body, ".pagination"), 0);
}

#[test]
fn outage_at_startup_recovers_once_service_is_back() {
    let source = Arc::new(FakeListingSource::with_properties(sample_properties(14)));
    let state = app_state(source.clone(), FilterPagePolicy::KeepPage);
    source.set_down(true);
    state.list.load();

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 502);

    source.set_down(false);
    for _ in 0..3 {
        let resp = handle(get("/"), &state).unwrap();
        assert_eq!(resp.status(), 200);
        let body = body_string(resp);
        assert_eq!(count(&body, ".property-card"), 6);
        assert_eq!(text_of(&body, ".page-label"), "Page 1 of 3");
    }

    // initial load, one retry while down, one that succeeded, then served from state
    assert_eq!(source.page_requests().len(), 3);
}

#[test]
fn failed_next_page_can_step_back() {
    let (source, state) = loaded(14);

    source.set_down(true);
    handle(post_form("/page/next", ""), &state).unwrap();
    assert_eq!(state.list.snapshot().cursor.page, 2);
    assert!(state.list.snapshot().error.is_some());

    source.set_down(false);
    let resp = handle(post_form("/page/prev", ""), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let snap = state.list.snapshot();
    assert_eq!(snap.cursor.page, 1);
    assert!(snap.error.is_none());

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(text_of(&body_string(resp), ".page-label"), "Page 1 of 3");
    assert_eq!(
        source.page_requests(),
        vec![
            PageQuery::new(1, None),
            PageQuery::new(2, None),
            PageQuery::new(1, None),
        ]
    );
}

#[test]
fn failed_next_page_is_retried_not_skipped() {
    let (source, state) = loaded(14);

    source.set_down(true);
    handle(post_form("/page/next", ""), &state).unwrap();
    source.set_down(false);

    // a second click retries page 2 instead of moving on to 3
    handle(post_form("/page/next", ""), &state).unwrap();
    assert_eq!(state.list.snapshot().cursor.page, 2);

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(text_of(&body_string(resp), ".page-label"), "Page 2 of 3");
    assert_eq!(
        source.page_requests(),
        vec![
            PageQuery::new(1, None),
            PageQuery::new(2, None),
            PageQuery::new(2, None),
        ]
    );
}

#[test]
fn failed_page_is_retried_on_next_visit() {
    let (source, state) = loaded(14);

    source.set_down(true);
    handle(post_form("/page/next", ""), &state).unwrap();
    assert_eq!(handle(get("/"), &state).unwrap().status(), 502);

    source.set_down(false);
    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(text_of(&body_string(resp), ".page-label"), "Page 2 of 3");
    assert!(state.list.snapshot().error.is_none());
}

#[test]
fn loading_placeholder_while_request_in_flight() {
    let source = Arc::new(FakeListingSource::with_properties(sample_properties(3)));
    let state = app_state(source, FilterPagePolicy::KeepPage);

    // a request has started but not completed
    let _pending = state.list.fetch_state().begin(PageQuery::default());

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Wait while we are fetching properties"));
    assert_eq!(count(&body, ".property-card"), 0);
}

#[test]
fn search_narrows_current_page_only() {
    let (_, state) = loaded(14);

    // page 1 holds Residence 1..6; cities cycle Mumbai, Pune, Goa, Delhi
    let body = body_string(handle(get("/?q=PUNE"), &state).unwrap());
    assert_eq!(count(&body, ".property-card"), 2);
    assert!(body.contains("Residence 2, Pune"));
    assert!(body.contains("Residence 6, Pune"));
    // Residence 10 is in Pune too, but on page 2
    assert!(!body.contains("Residence 10"));

    let body = body_string(handle(get("/?q=residence%203"), &state).unwrap());
    assert_eq!(count(&body, ".property-card"), 1);

    let body = body_string(handle(get("/?q="), &state).unwrap());
    assert_eq!(count(&body, ".property-card"), 6);
}

#[test]
fn next_and_prev_follow_envelope() {
    let (source, state) = loaded(14);

    let resp = handle(post_form("/page/next", ""), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let body = body_string(handle(get("/"), &state).unwrap());
    assert_eq!(text_of(&body, ".page-label"), "Page 2 of 3");

    handle(post_form("/page/next", ""), &state).unwrap();
    // last page: no next, the click is ignored
    handle(post_form("/page/next", ""), &state).unwrap();
    let body = body_string(handle(get("/"), &state).unwrap());
    assert_eq!(text_of(&body, ".page-label"), "Page 3 of 3");
    assert_eq!(count(&body, ".property-card"), 2);

    assert_eq!(
        source.page_requests(),
        vec![
            PageQuery::new(1, None),
            PageQuery::new(2, None),
            PageQuery::new(3, None),
        ]
    );
}

#[test]
fn prev_on_first_page_is_ignored() {
    let (source, state) = loaded(14);

    handle(post_form("/page/prev", ""), &state).unwrap();
    assert_eq!(source.page_requests(), vec![PageQuery::new(1, None)]);
}

#[test]
fn filter_selection_sets_and_clears_type() {
    let (source, state) = loaded(14);

    let resp = handle(post_form("/filter", "property_type=house"), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(get("/"), &state).unwrap());
    assert_eq!(count(&body, "option[value=house][selected]"), 1);

    handle(post_form("/filter", "property_type=all"), &state).unwrap();

    let requests = source.page_requests();
    assert_eq!(requests[1], PageQuery::new(1, Some(PropertyType::House)));
    assert_eq!(requests[2], PageQuery::new(1, None));
}

#[test]
fn unknown_filter_is_bad_request() {
    let (_, state) = loaded(3);
    let result = handle(post_form("/filter", "property_type=castle"), &state);
    assert!(matches!(result, Err(crate::errors::ServerError::BadRequest(_))));
}

#[test]
fn quick_view_defaults_to_first_listing() {
    let (_, state) = loaded(14);

    let body = body_string(handle(get("/?details=open"), &state).unwrap());
    assert_eq!(count(&body, "dialog[open]"), 1);
    assert_eq!(text_of(&body, "dialog h1"), "Residence 1");

    let body = body_string(handle(get("/?details=open&selected=p4"), &state).unwrap());
    assert_eq!(text_of(&body, "dialog h1"), "Residence 4");
    assert!(body.contains("Listed on: 3/5/2024"));

    let body = body_string(handle(get("/"), &state).unwrap());
    assert_eq!(count(&body, "dialog"), 0);
}

#[test]
fn unknown_route_is_not_found() {
    let (_, state) = loaded(3);
    let result = handle(get("/saved"), &state);
    assert!(matches!(result, Err(crate::errors::ServerError::NotFound)));
}
