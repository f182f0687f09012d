mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::make_app;

#[tokio::test]
async fn create_records_project_and_assignments() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;
    let e1 = app.seed_employee("e1@example.com", dept).await;
    let e2 = app.seed_employee("e2@example.com", dept).await;

    let (status, body) = app
        .post(
            "/projects/create",
            json!({
                "name": "Apollo",
                "description": "Rewrite",
                "startDate": "2024-01-01",
                "endDate": null,
                "departmentId": dept,
                "employeeIds": [e1, e2]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Apollo");
    assert_eq!(body["endDate"], serde_json::Value::Null);

    let id = body["id"].as_i64().unwrap();
    let (_, details) = app.get(&format!("/projects/get/{id}")).await;
    let assigned: Vec<i64> = details["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(assigned, vec![e1, e2]);
}

#[tokio::test]
async fn create_rejects_unknown_employee_ids() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;
    let e1 = app.seed_employee("e1@example.com", dept).await;

    let (status, body) = app
        .post(
            "/projects/create",
            json!({
                "name": "Apollo",
                "description": null,
                "startDate": "2024-01-01",
                "endDate": null,
                "departmentId": dept,
                "employeeIds": [e1, 999999]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "One or more employee IDs do not exist");

    // Nothing was persisted.
    let (_, list) = app.get("/projects/getAll").await;
    assert_eq!(list["pagination"]["total"], 0);
}

#[tokio::test]
async fn get_embeds_department_and_employees() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;
    let e1 = app.seed_employee("e1@example.com", dept).await;
    let id = app.seed_project("Apollo", dept, &[e1]).await;

    let (status, body) = app.get(&format!("/projects/get/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"]["name"], "Engineering");
    assert_eq!(body["employees"][0]["email"], "e1@example.com");
}

#[tokio::test]
async fn list_embeds_relations_and_paginates() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;
    let e1 = app.seed_employee("e1@example.com", dept).await;
    for i in 1..=12 {
        app.seed_project(&format!("Project {i:02}"), dept, &[e1]).await;
    }

    let (status, body) = app.get("/projects/getAll?page=2&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 12);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["department"]["id"], dept);
}

#[tokio::test]
async fn list_filters_by_name_and_start_date() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;

    app.post(
        "/projects/create",
        json!({
            "name": "Early",
            "description": null,
            "startDate": "2023-06-01",
            "endDate": null,
            "departmentId": dept,
            "employeeIds": []
        }),
    )
    .await;
    app.post(
        "/projects/create",
        json!({
            "name": "Late",
            "description": null,
            "startDate": "2024-06-01",
            "endDate": null,
            "departmentId": dept,
            "employeeIds": []
        }),
    )
    .await;

    let (status, body) = app.get("/projects/getAll?startDate=2024-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Late");

    let (status, body) = app.get("/projects/getAll?name=Ear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Early");
}

#[tokio::test]
async fn list_rejects_invalid_sort_order() {
    let app = make_app();

    let (status, _) = app.get("/projects/getAll?sortOrder=ascending").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_assignments() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;
    let e1 = app.seed_employee("e1@example.com", dept).await;
    let e2 = app.seed_employee("e2@example.com", dept).await;
    let id = app.seed_project("Apollo", dept, &[e1]).await;

    let (status, body) = app
        .put(
            &format!("/projects/update/{id}"),
            json!({
                "name": "Apollo II",
                "description": null,
                "startDate": "2024-02-01",
                "endDate": "2025-01-31",
                "departmentId": dept,
                "employeeIds": [e2]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Apollo II");
    let assigned: Vec<i64> = body["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(assigned, vec![e2]);
}

#[tokio::test]
async fn update_missing_project_is_404() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;

    let (status, _) = app
        .put(
            "/projects/update/999999",
            json!({
                "name": "Ghost",
                "description": null,
                "startDate": "2024-01-01",
                "endDate": null,
                "departmentId": dept,
                "employeeIds": []
            }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = make_app();
    let dept = app.seed_department("Engineering").await;
    let id = app.seed_project("Doomed", dept, &[]).await;

    let (status, _) = app.delete(&format!("/projects/delete/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/projects/get/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");
}
