//! End-to-end page serving tests
//!
//! Success Criteria:
//! 1. A full document built through the facade renders as expected
//! 2. The same page served over the HTTP adapter produces identical bytes
//! 3. Untrusted request data is escaped in the served page
//!
//! Test Categories:
//! - Happy Path: 2 tests
//! - Security: 1 test

use rio::prelude::*;
use rstest::*;

fn layout(title: &'static str, content: Node) -> Node {
	doctype(html([
		lang("en"),
		head([meta([charset("utf-8")]), title_el([text(title)])]),
		body([main([id("content"), content])]),
	]))
}

#[rstest]
fn test_layout_renders_document() {
	let page = layout("Home", p([text("Welcome")]));

	assert_eq!(
		page.render_to_string(),
		concat!(
			r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>Home</title></head>"#,
			r#"<body><main id="content"><p>Welcome</p></main></body></html>"#,
		)
	);
}

#[rstest]
#[tokio::test]
async fn test_served_page_matches_rendered_page() {
	let expected = layout("Home", p([text("Welcome")])).render_to_string();
	let handler = dom_handler(|_w, _req| Some(layout("Home", p([text("Welcome")]))));

	let response = handler
		.handle(Request::builder().build().unwrap())
		.await
		.unwrap();

	assert_eq!(response.status.as_u16(), 200);
	assert_eq!(response.body, expected);
}

#[rstest]
#[tokio::test]
async fn test_request_data_is_escaped() {
	let handler = dom_handler(|_w, req| {
		let query = req.query().unwrap_or_default().to_string();
		Some(layout("Search", div([data("q", query.clone()), text(query)])))
	});
	let request = Request::builder()
		.uri("/search?%3Cscript%3E=%22x%22&a='b'")
		.build()
		.unwrap();

	let response = handler.handle(request).await.unwrap();
	let body = String::from_utf8(response.body.to_vec()).unwrap();

	assert!(body.contains(r#"<div data-q="%3Cscript%3E=%22x%22&amp;a=&#39;b&#39;">"#));
	assert!(!body.contains("'b'"));
}
