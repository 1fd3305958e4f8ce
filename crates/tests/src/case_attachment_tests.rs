use axum::http::StatusCode;

use crate::common::{get, post_json, test_app};

fn files(names: &[&str]) -> String {
    let files: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "sizeBytes": 2048,
                "contentType": "application/pdf",
            })
        })
        .collect();
    serde_json::json!({ "files": files }).to_string()
}

#[tokio::test]
async fn attach_files_appends_in_order() {
    let app = test_app();

    let (status, resp) = post_json(
        &app,
        "/api/v1/cases/case-2/attachments",
        &files(&["عقد.pdf", "مذكرة.pdf"]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let attachments = resp["attachments"].as_array().unwrap();
    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[0]["id"], "case-2-att-1");
    assert_eq!(attachments[1]["fileName"], "مذكرة.pdf");

    let (_, fetched) = get(&app, "/api/v1/cases/case-2").await;
    assert_eq!(fetched["attachments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn attach_empty_list_400() {
    let app = test_app();

    let (status, resp) = post_json(&app, "/api/v1/cases/case-2/attachments", &files(&[])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["kind"], "BadRequest");

    let (_, fetched) = get(&app, "/api/v1/cases/case-2").await;
    assert!(fetched["attachments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn attach_to_unknown_case_404() {
    let app = test_app();

    let (status, _) = post_json(
        &app,
        "/api/v1/cases/case-999/attachments",
        &files(&["a.pdf"]),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
