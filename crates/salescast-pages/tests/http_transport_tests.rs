//! HTTP transport integration tests
//!
//! Runs full submit cycles through `HttpTransport` against a local axum server.
//!
//! Success Criteria:
//! 1. Form fields arrive URL-encoded with the form content type
//! 2. The HTTP status does not decide the outcome, the body does
//! 3. An unreachable server fails silently and restores the form

#![cfg(not(target_arch = "wasm32"))]

use std::rc::Rc;

use axum::Router;
use axum::extract::Form;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::post;
use rstest::*;
use salescast_pages::testing::{MemoryPage, RecordedSubmit};
use salescast_pages::transport::FORM_CONTENT_TYPE;
use salescast_pages::{
	CycleReport, FormInputSet, HttpTransport, PredictFormHandler, PredictFormSettings,
};
use serde_json::json;
use url::Url;

async fn serve(router: Router) -> Url {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, router).await.unwrap();
	});
	Url::parse(&format!("http://{}/", addr)).unwrap()
}

fn handler(base: Url) -> Rc<PredictFormHandler<HttpTransport, MemoryPage>> {
	let settings = PredictFormSettings::default();
	let page = MemoryPage::for_settings(&settings).with_form_fields(
		&settings.form_id,
		FormInputSet::new()
			.with("Description", "Mug & Saucer")
			.with("Quantity", "2")
			.with("UnitPrice", "3.5"),
	);
	Rc::new(PredictFormHandler::new(
		HttpTransport::with_base(base),
		page,
		settings,
	))
}

/// Echoes the received fields back as recommendations.
async fn echo_fields(
	headers: HeaderMap,
	Form(fields): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
	let content_type = headers
		.get(header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default()
		.to_string();
	let echoed: Vec<String> = fields
		.iter()
		.map(|(name, value)| format!("{}={}", name, value))
		.collect();
	axum::Json(json!({
		"sales_prediction": 7,
		"days_to_sell": 12,
		"purchase_probability": 0.25,
		"recommendations": [content_type, echoed.join(";")],
	}))
}

#[rstest]
#[tokio::test]
async fn test_fields_are_posted_as_urlencoded_form() {
	let base = serve(Router::new().route("/predict", post(echo_fields))).await;
	let handler = handler(base);

	let report = handler.on_submit(&RecordedSubmit::new()).await;
	let page = handler.page();

	assert_eq!(report, CycleReport::Rendered);
	assert_eq!(page.text("profit-result").as_deref(), Some("Profit Prediction: 7"));
	assert_eq!(
		page.list_items("recommendations-list"),
		vec![
			FORM_CONTENT_TYPE.to_string(),
			"Description=Mug &amp; Saucer;Quantity=2;UnitPrice=3.5".to_string(),
		]
	);
	assert!(page.is_visible("results"));
	assert!(page.is_visible("predict-form"));
}

#[rstest]
#[tokio::test]
async fn test_error_status_with_error_body_alerts() {
	let router = Router::new().route(
		"/predict",
		post(|| async {
			(
				StatusCode::BAD_REQUEST,
				axum::Json(json!({"error": "Missing input values."})),
			)
		}),
	);
	let handler = handler(serve(router).await);

	let report = handler.on_submit(&RecordedSubmit::new()).await;

	assert_eq!(report, CycleReport::Alerted("Missing input values.".to_string()));
	assert_eq!(handler.page().alerts(), vec!["Missing input values.".to_string()]);
	assert!(!handler.page().is_visible("results"));
}

#[rstest]
#[case(StatusCode::INTERNAL_SERVER_ERROR, "<h1>Internal Server Error</h1>")]
#[case(StatusCode::OK, "<p>maintenance</p>")]
#[tokio::test]
async fn test_non_json_body_fails_silently(#[case] status: StatusCode, #[case] body: &'static str) {
	let router = Router::new().route("/predict", post(move || async move { (status, Html(body)) }));
	let handler = handler(serve(router).await);

	let report = handler.on_submit(&RecordedSubmit::new()).await;

	assert!(matches!(report, CycleReport::Failed(ref message) if message.starts_with("Invalid response body")));
	assert!(handler.page().alerts().is_empty());
	assert!(handler.page().is_visible("predict-form"));
	assert!(!handler.page().is_visible("results"));
}

#[rstest]
#[tokio::test]
async fn test_non_finite_number_fails_silently() {
	let router = Router::new().route(
		"/predict",
		post(|| async {
			(
				[(header::CONTENT_TYPE, "application/json")],
				r#"{"sales_prediction": NaN, "days_to_sell": Infinity, "purchase_probability": 0.5, "recommendations": []}"#,
			)
		}),
	);
	let handler = handler(serve(router).await);

	let report = handler.on_submit(&RecordedSubmit::new()).await;

	assert!(matches!(report, CycleReport::Failed(_)));
	assert!(!handler.page().is_visible("results"));
}

#[rstest]
#[tokio::test]
async fn test_unreachable_server_fails_silently() {
	// Bind and drop to get a port nothing listens on
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	let base = Url::parse(&format!("http://{}/", addr)).unwrap();
	let handler = handler(base);

	let report = handler.on_submit(&RecordedSubmit::new()).await;

	assert!(matches!(report, CycleReport::Failed(ref message) if message.starts_with("Network error")));
	assert!(handler.page().alerts().is_empty());
	assert_eq!(handler.page().visibility_history("predict-form"), vec![false, true]);
	assert!(!handler.page().is_visible("results"));
}
