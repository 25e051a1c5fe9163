mod common;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate};
use classroll_core::Role;
use classroll_db::SchoolStore;
use classroll_models::NewAttendance;
use common::setup_test_app;
use serde_json::json;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap() + Duration::days(offset)
}

#[tokio::test]
async fn test_teacher_records_attendance() {
    let app = setup_test_app();
    let subject = app.store.insert_subject("Databases", "CS204", 5).await;
    let student = app.create_student("Aigerim", None).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    let (status, body) = app
        .post(
            "/attendance/subject",
            Some(&teacher_token),
            json!({
                "subject_id": subject.id,
                "student_id": student.id,
                "visit_day": "2024-09-02",
                "visited": true
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_number());
    assert_eq!(body["visit_day"], "2024-09-02");
    assert_eq!(body["visited"], true);
    assert_eq!(body["student_id"], student.id);
}

#[tokio::test]
async fn test_visited_defaults_to_false() {
    let app = setup_test_app();
    let subject = app.store.insert_subject("Databases", "CS204", 5).await;
    let student = app.create_student("Aigerim", None).await;
    let (_, admin_token) = app.login_as(Role::Admin).await;

    let (status, body) = app
        .post(
            "/attendance/subject",
            Some(&admin_token),
            json!({ "subject_id": subject.id, "student_id": student.id, "visit_day": "2024-09-02" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["visited"], false);
}

#[tokio::test]
async fn test_invalid_attendance_is_rejected_without_writing() {
    let app = setup_test_app();
    let subject = app.store.insert_subject("Databases", "CS204", 5).await;
    let student = app.create_student("Aigerim", None).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    let cases = [
        json!({ "subject_id": subject.id, "student_id": 0, "visit_day": "2024-09-02", "visited": true }),
        json!({ "subject_id": 0, "student_id": student.id, "visit_day": "2024-09-02" }),
        json!({ "subject_id": subject.id, "student_id": student.id, "visit_day": "" }),
        json!({ "subject_id": subject.id, "student_id": student.id, "visit_day": "yesterday" }),
        json!({ "subject_id": subject.id, "student_id": student.id }),
    ];

    for body in cases {
        let (status, response) = app
            .post("/attendance/subject", Some(&teacher_token), body)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].is_string());
    }

    assert!(app.store.attendance_for_subject(subject.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_student_id_names_the_field() {
    let app = setup_test_app();
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    let (status, body) = app
        .post(
            "/attendance/subject",
            Some(&teacher_token),
            json!({ "subject_id": 1, "student_id": 0, "visit_day": "2024-09-02", "visited": true }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "student_id: Student ID must be a positive integer");
}

#[tokio::test]
async fn test_unknown_references_are_bad_requests() {
    let app = setup_test_app();
    let subject = app.store.insert_subject("Databases", "CS204", 5).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    let (status, body) = app
        .post(
            "/attendance/subject",
            Some(&teacher_token),
            json!({ "subject_id": subject.id, "student_id": 404, "visit_day": "2024-09-02" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid student_id: student does not exist");
}

#[tokio::test]
async fn test_students_cannot_record_attendance() {
    let app = setup_test_app();
    let (student, token) = app.linked_student().await;

    let (status, _) = app
        .post(
            "/attendance/subject",
            Some(&token),
            json!({ "subject_id": 1, "student_id": student.id, "visit_day": "2024-09-02", "visited": true }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_listing_is_capped_and_newest_first() {
    let app = setup_test_app();
    let subject = app.store.insert_subject("Databases", "CS204", 5).await;
    let student = app.create_student("Aigerim", None).await;
    let (_, teacher_token) = app.login_as(Role::Teacher).await;

    for offset in 0..55 {
        app.store
            .create_attendance(NewAttendance {
                subject_id: subject.id,
                visit_day: day(offset),
                visited: offset % 2 == 0,
                student_id: student.id,
            })
            .await
            .unwrap();
    }

    let (status, body) = app
        .get(
            &format!("/attendanceBySubjectId/{}", subject.id),
            Some(&teacher_token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 50);
    assert_eq!(records[0]["visit_day"], day(54).to_string());
    assert_eq!(records[49]["visit_day"], day(5).to_string());

    let days: Vec<&str> = records
        .iter()
        .map(|r| r["visit_day"].as_str().unwrap())
        .collect();
    let mut sorted = days.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(days, sorted);

    let (status, body) = app
        .get(
            &format!("/attendanceByStudentId/{}", student.id),
            Some(&teacher_token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 50);
    assert_eq!(records[0]["visit_day"], day(54).to_string());
    assert_eq!(records[49]["visit_day"], day(5).to_string());
}

#[tokio::test]
async fn test_student_reads_own_attendance_only() {
    let app = setup_test_app();
    let subject = app.store.insert_subject("Databases", "CS204", 5).await;
    let (own, token) = app.linked_student().await;
    let other = app.create_student("Someone Else", None).await;

    app.store
        .create_attendance(NewAttendance {
            subject_id: subject.id,
            visit_day: day(0),
            visited: true,
            student_id: own.id,
        })
        .await
        .unwrap();

    let (status, body) = app
        .get(&format!("/attendanceByStudentId/{}", own.id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = app
        .get(&format!("/attendanceByStudentId/{}", other.id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied: you can only view your own attendance");
}

#[tokio::test]
async fn test_attendance_of_unknown_student_is_empty() {
    let app = setup_test_app();
    let (_, admin_token) = app.login_as(Role::Admin).await;

    let (status, body) = app.get("/attendanceByStudentId/777", Some(&admin_token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_attendance_by_subject_is_staff_only() {
    let app = setup_test_app();
    let (_, token) = app.linked_student().await;

    let (status, _) = app.get("/attendanceBySubjectId/1", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, teacher_token) = app.login_as(Role::Teacher).await;
    let (status, body) = app
        .get("/attendanceBySubjectId/abc", Some(&teacher_token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid subject ID");
}
