//! End-to-end doctor and appointment flows against a live PostgreSQL
//! instance. Run with `cargo test -- --ignored`.

mod common;

use http::StatusCode;

use clinic_entity::user::RoleType;

fn doctor_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Dr. Gregory House",
        "dateOfBirth": "1969-06-11",
        "yearOfGraduation": 1993,
        "nameOfClinic": "Princeton-Plainsboro",
        "speciality": "FAMILY_MEDICINE",
    })
}

#[tokio::test]
#[ignore]
async fn test_doctor_crud_lifecycle() {
    let app = common::TestApp::new().await;
    let admin = app.issue_token("root@doctors.test", RoleType::Admin);

    let created = app
        .request("POST", "/api/doctors", Some(doctor_body()), Some(&admin))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body.get("id").unwrap().as_i64().unwrap();

    let fetched = app
        .request("GET", &format!("/api/doctors/{id}"), None, Some(&admin))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body.get("name").unwrap(), "Dr. Gregory House");

    let mut update = doctor_body();
    update["nameOfClinic"] = serde_json::json!("Princeton General");
    let updated = app
        .request(
            "PUT",
            &format!("/api/doctors/{id}"),
            Some(update),
            Some(&admin),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body.get("nameOfClinic").unwrap(), "Princeton General");

    let deleted = app
        .request("DELETE", &format!("/api/doctors/{id}"), None, Some(&admin))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/doctors/{id}"), None, Some(&admin))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(
        gone.body.get("message").unwrap().as_str().unwrap(),
        format!("Doctor not found with id: {id}")
    );
}

#[tokio::test]
#[ignore]
async fn test_user_cannot_modify_doctors() {
    let app = common::TestApp::new().await;
    let user = app.issue_token("bob@doctors.test", RoleType::User);

    let response = app
        .request("POST", "/api/doctors", Some(doctor_body()), Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Reads are fine for plain users.
    let list = app.request("GET", "/api/doctors", None, Some(&user)).await;
    assert_eq!(list.status, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_speciality_and_birthdate_queries() {
    let app = common::TestApp::new().await;
    let admin = app.issue_token("root@doctors.test", RoleType::Admin);

    app.request("POST", "/api/doctors", Some(doctor_body()), Some(&admin))
        .await;

    let by_speciality = app
        .request(
            "GET",
            "/api/doctors/speciality/FAMILY_MEDICINE",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(by_speciality.status, StatusCode::OK);
    assert_eq!(by_speciality.body.as_array().unwrap().len(), 1);

    let none = app
        .request("GET", "/api/doctors/speciality/SURGERY", None, Some(&admin))
        .await;
    assert_eq!(none.body.as_array().unwrap().len(), 0);

    let unknown = app
        .request(
            "GET",
            "/api/doctors/speciality/DERMATOLOGY",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);

    let in_range = app
        .request(
            "GET",
            "/api/doctors/birthdate/range?from=1960-01-01&to=1979-12-31",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(in_range.status, StatusCode::OK);
    assert_eq!(in_range.body.as_array().unwrap().len(), 1);

    let out_of_range = app
        .request(
            "GET",
            "/api/doctors/birthdate/range?from=1990-01-01&to=1999-12-31",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(out_of_range.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_appointments_nested_under_doctor() {
    let app = common::TestApp::new().await;
    let admin = app.issue_token("root@doctors.test", RoleType::Admin);

    let doctor = app
        .request("POST", "/api/doctors", Some(doctor_body()), Some(&admin))
        .await;
    let doctor_id = doctor.body.get("id").unwrap().as_i64().unwrap();

    let booked = app
        .request(
            "POST",
            &format!("/api/doctors/{doctor_id}/appointments"),
            Some(serde_json::json!({
                "clientName": "John Smith",
                "date": "2026-09-01",
                "time": "10:30:00",
                "comment": "First visit",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(booked.status, StatusCode::CREATED);

    let listed = app
        .request(
            "GET",
            &format!("/api/doctors/{doctor_id}/appointments"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    // Deleting the doctor cascades to the appointment.
    app.request("DELETE", &format!("/api/doctors/{doctor_id}"), None, Some(&admin))
        .await;
    let all = app.request("GET", "/api/appointments", None, Some(&admin)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_booking_for_missing_doctor_is_not_found() {
    let app = common::TestApp::new().await;
    let admin = app.issue_token("root@doctors.test", RoleType::Admin);

    let response = app
        .request(
            "POST",
            "/api/doctors/99999/appointments",
            Some(serde_json::json!({
                "clientName": "John Smith",
                "date": "2026-09-01",
                "time": "10:30:00",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
