use axum::http::StatusCode;

use crate::common::{get, ids, test_app};

#[tokio::test]
async fn every_collection_lists() {
    let app = test_app();

    for collection in shared_types::Collection::ALL {
        let (status, body) = get(&app, &format!("/api/v1/{}", collection.as_str())).await;
        assert_eq!(status, StatusCode::OK, "Failed for {}", collection.as_str());
        assert!(
            !body.as_array().unwrap().is_empty(),
            "{} is empty",
            collection.as_str()
        );
    }
}

#[tokio::test]
async fn unknown_collection_404() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/judges").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn search_customers_by_name_substring() {
    let app = test_app();

    let q = "%D8%B4%D8%B1%D9%83%D8%A9"; // "شركة"
    let (status, body) = get(&app, &format!("/api/v1/customers?q={q}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["cus-2", "cus-6"]);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = test_app();

    let (_, lower) = get(&app, "/api/v1/customers?q=example.com").await;
    let (_, upper) = get(&app, "/api/v1/customers?q=EXAMPLE.COM").await;

    assert_eq!(ids(&lower), vec!["cus-1", "cus-4"]);
    assert_eq!(ids(&lower), ids(&upper));
}

#[tokio::test]
async fn blank_query_returns_everything() {
    let app = test_app();

    let (_, all) = get(&app, "/api/v1/tasks").await;
    let (_, blank) = get(&app, "/api/v1/tasks?q=%20%20").await;

    assert_eq!(ids(&all), ids(&blank));
}

#[tokio::test]
async fn search_with_no_match_is_empty() {
    let app = test_app();

    let (status, body) = get(&app, "/api/v1/cases?q=zzzz-no-such-case").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}
