mod common;

use axum::http::StatusCode;
use classroll_core::Role;
use classroll_db::SchoolStore;
use common::setup_test_app;
use serde_json::json;

#[tokio::test]
async fn test_list_students_is_staff_only() {
    let app = setup_test_app();
    let (_, student_token) = app.login_as(Role::Student).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;
    let (_, admin_token) = app.login_as(Role::Admin).await;

    let (status, _) = app.get("/students", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.get("/students", Some(&student_token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied. Required role: teacher or admin");

    let (status, _) = app.get("/students", Some(&teacher_token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/students", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_students_merges_records_and_waiting_accounts() {
    let app = setup_test_app();
    let group = app.store.insert_group("CS-21", 1, 2).await;
    let orphan = app.create_student("Orphan Record", Some(group.id)).await;
    let (linked, _) = app.linked_student().await;
    let waiting = app.create_user("waiting@school.com", Role::Student).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    let (status, body) = app.get("/students", Some(&teacher_token)).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["id"], linked.id);
    assert!(rows[0]["user_id"].is_number());

    assert_eq!(rows[1]["id"], orphan.id);
    assert!(rows[1]["user_id"].is_null());
    assert_eq!(rows[1]["group_name"], "CS-21");

    assert!(rows[2]["id"].is_null());
    assert_eq!(rows[2]["user_id"], waiting.id);
    assert_eq!(rows[2]["group_name"], "No Group");
}

#[tokio::test]
async fn test_create_student_is_admin_only() {
    let app = setup_test_app();
    let (_, teacher_token) = app.login_as(Role::Teacher).await;
    let body = json!({
        "full_name": "Dias",
        "gender": "male",
        "birth_date": "2004-01-02"
    });

    let (status, _) = app.post("/students", Some(&teacher_token), body).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_student() {
    let app = setup_test_app();
    let group = app.store.insert_group("CS-21", 1, 2).await;
    let (_, admin_token) = app.login_as(Role::Admin).await;

    let (status, body) = app
        .post(
            "/students",
            Some(&admin_token),
            json!({
                "full_name": "Dias",
                "gender": "male",
                "birth_date": "2004-01-02",
                "group_id": group.id
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["full_name"], "Dias");
    assert_eq!(body["birth_date"], "2004-01-02");
    assert_eq!(body["group_id"], group.id);
    assert_eq!(body["group_name"], "CS-21");
    assert!(body["user_id"].is_null());
}

#[tokio::test]
async fn test_create_student_validation() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;

    let cases = [
        json!({ "full_name": "", "gender": "male", "birth_date": "2004-01-02" }),
        json!({ "full_name": "Dias", "gender": "male", "birth_date": "02.01.2004" }),
        json!({ "full_name": "Dias", "gender": "male" }),
        json!({ "full_name": "Dias", "gender": "male", "birth_date": "2004-01-02", "group_id": 0 }),
    ];

    for body in cases {
        let (status, _) = app.post("/students", Some(&admin_token), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, listing) = app.get("/students", Some(&admin_token)).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_student_unknown_group() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;

    let (status, body) = app
        .post(
            "/students",
            Some(&admin_token),
            json!({
                "full_name": "Dias",
                "gender": "male",
                "birth_date": "2004-01-02",
                "group_id": 77
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid group_id. Please select a valid group");
}

#[tokio::test]
async fn test_create_student_with_user_link() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;
    let account = app.create_user("s@school.com", Role::Student).await;

    let (status, body) = app
        .post(
            "/students",
            Some(&admin_token),
            json!({
                "full_name": "Given Name",
                "gender": "female",
                "birth_date": "2005-05-05",
                "user_id": account.id
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["full_name"], "Given Name");
    assert_eq!(body["user_id"], account.id);

    let student_id = body["id"].as_i64().unwrap() as i32;
    assert_eq!(
        app.store.linked_student_id(account.id).await.unwrap(),
        Some(student_id)
    );
}

#[tokio::test]
async fn test_create_student_from_user() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;
    let account = app.create_user("s@school.com", Role::Student).await;
    let body = json!({
        "user_id": account.id,
        "gender": "female",
        "birth_date": "2005-05-05"
    });

    let (status, created) = app
        .post("/students/from-user", Some(&admin_token), body.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["full_name"], account.full_name);
    assert_eq!(created["user_id"], account.id);
    assert_eq!(created["group_name"], "No Group");

    let (status, conflict) = app
        .post("/students/from-user", Some(&admin_token), body)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict["error"], "User already has a student profile");
}

#[tokio::test]
async fn test_create_student_from_user_checks_account() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;
    let teacher = app.create_user("t@school.com", Role::Teacher).await;

    let (status, body) = app
        .post(
            "/students/from-user",
            Some(&admin_token),
            json!({ "user_id": teacher.id, "gender": "male", "birth_date": "1990-01-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User is not a student");

    let (status, body) = app
        .post(
            "/students/from-user",
            Some(&admin_token),
            json!({ "user_id": 4242, "gender": "male", "birth_date": "1990-01-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, _) = app
        .post(
            "/students/from-user",
            Some(&admin_token),
            json!({ "user_id": 0, "gender": "male", "birth_date": "1990-01-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_student_reads_own_profile_only() {
    let app = setup_test_app();
    let (own, token) = app.linked_student().await;
    let other = app.create_student("Someone Else", None).await;

    let (status, body) = app.get(&format!("/student/{}", own.id), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], own.id);

    let (status, body) = app
        .get(&format!("/student/{}", other.id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied: you can only view your own profile");
}

#[tokio::test]
async fn test_unlinked_student_cannot_read_profiles() {
    let app = setup_test_app();
    let (_, token) = app.login_as(Role::Student).await;
    let record = app.create_student("Anyone", None).await;

    let (status, _) = app
        .get(&format!("/student/{}", record.id), Some(&token))
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_read_any_profile() {
    let app = setup_test_app();
    let record = app.create_student("Anyone", None).await;
    let (_, admin_token) = app.login_as(Role::Admin).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    let (status, _) = app
        .get(&format!("/student/{}", record.id), Some(&teacher_token))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/student/9999", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn test_invalid_student_id_in_path() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;

    for uri in ["/student/abc", "/student/0", "/student/-4"] {
        let (status, body) = app.get(uri, Some(&admin_token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid student ID");
    }
}
