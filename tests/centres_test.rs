mod common;

use common::{TestApp, PLACES_SEARCH_PATH};
use serde_json::{json, Value};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn places_body(result_count: usize) -> Value {
    let results: Vec<Value> = (0..result_count)
        .map(|i| {
            json!({
                "name": format!("Centre {i}"),
                "vicinity": format!("{i} Main Street"),
                "rating": 4.0,
                "user_ratings_total": 10 * i,
                "place_id": format!("place-{i}"),
                "geometry": { "location": { "lat": 51.5 + i as f64, "lng": -0.1 } },
                "types": ["health"]
            })
        })
        .collect();
    json!({ "results": results, "status": "OK" })
}

#[tokio::test]
async fn missing_lat_is_rejected_before_any_outbound_call() {
    let app = TestApp::spawn().await;

    // Nothing may reach the provider on the validation path.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.places)
        .await;

    let response = app.post("/nearby-centres", &json!({ "lng": 10 })).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "lat and lng are required" }));
}

#[tokio::test]
async fn falsy_coordinates_are_rejected() {
    let app = TestApp::spawn().await;

    for payload in [
        json!({ "lat": 0, "lng": 10 }),
        json!({ "lat": "", "lng": 10 }),
        json!({ "lat": null, "lng": 10 }),
        json!({ "lat": 51.5, "lng": false }),
        json!({}),
    ] {
        let response = app.post("/nearby-centres", &payload).await;
        assert_eq!(response.status(), 400, "payload {payload} was accepted");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "lat and lng are required" }));
    }
}

#[tokio::test]
async fn missing_api_key_fails_without_an_outbound_call() {
    let app = TestApp::spawn_with_places_key("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.places)
        .await;

    let response = app
        .post("/nearby-centres", &json!({ "lat": 51.5, "lng": -0.12 }))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Missing Google API Key" }));
}

#[tokio::test]
async fn results_are_capped_at_twelve_in_provider_order() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(PLACES_SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body(15)))
        .expect(1)
        .mount(&app.places)
        .await;

    let response = app
        .post("/nearby-centres", &json!({ "lat": 51.5, "lng": -0.12 }))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let centres = body["centres"].as_array().unwrap();
    assert_eq!(centres.len(), 12);
    assert_eq!(centres[0]["name"], "Centre 0");
    assert_eq!(centres[11]["name"], "Centre 11");
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn search_query_carries_location_radius_keyword_and_type() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(PLACES_SEARCH_PATH))
        .and(query_param("location", "51.5,-0.12"))
        .and(query_param("radius", "2000"))
        .and(query_param(
            "keyword",
            "therapy|mental health|counselling|psychologist|psychiatrist",
        ))
        .and(query_param("type", "health"))
        .and(query_param("key", "test-places-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body(1)))
        .expect(1)
        .mount(&app.places)
        .await;

    let response = app
        .post(
            "/nearby-centres",
            &json!({ "lat": 51.5, "lng": -0.12, "radius": "2000" }),
        )
        .await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn radius_defaults_to_5000_when_absent_or_non_numeric() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(PLACES_SEARCH_PATH))
        .and(query_param("radius", "5000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(places_body(0)))
        .expect(2)
        .mount(&app.places)
        .await;

    let absent = app
        .post("/nearby-centres", &json!({ "lat": 51.5, "lng": -0.12 }))
        .await;
    assert_eq!(absent.status(), 200);

    let non_numeric = app
        .post(
            "/nearby-centres",
            &json!({ "lat": 51.5, "lng": -0.12, "radius": "walking distance" }),
        )
        .await;
    assert_eq!(non_numeric.status(), 200);
}

#[tokio::test]
async fn address_falls_back_through_formatted_address_to_empty() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(PLACES_SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "name": "Has vicinity", "vicinity": "1 Elm Road" },
                { "name": "Has formatted", "formatted_address": "2 Oak Avenue" },
                { "name": "Has neither" }
            ],
            "status": "OK"
        })))
        .mount(&app.places)
        .await;

    let response = app
        .post("/nearby-centres", &json!({ "lat": 51.5, "lng": -0.12 }))
        .await;

    let body: Value = response.json().await.unwrap();
    let centres = body["centres"].as_array().unwrap();
    assert_eq!(centres[0]["address"], "1 Elm Road");
    assert_eq!(centres[1]["address"], "2 Oak Avenue");
    assert_eq!(centres[2]["address"], "");
}

#[tokio::test]
async fn missing_results_and_status_degrade_to_defaults() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(PLACES_SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.places)
        .await;

    let response = app
        .post("/nearby-centres", &json!({ "lat": 51.5, "lng": -0.12 }))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["centres"], json!([]));
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn provider_failure_exposes_details_to_the_caller() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(PLACES_SEARCH_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.places)
        .await;

    let response = app
        .post("/nearby-centres", &json!({ "lat": 51.5, "lng": -0.12 }))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to fetch nearby centres");
    assert_eq!(body["details"], "places provider returned 502");
}
