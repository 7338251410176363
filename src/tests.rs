use actix_web::{App, test, web::Data};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;

use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::db::run_migrations;
use crate::routes;

const TEST_SECRET: &str = "test-signing-key";

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        session_ttl: 28800,
        rate_login_per_min: 10_000,
        rate_signup_per_min: 10_000,
        rate_reset_per_min: 10_000,
        rate_protected_per_min: 10_000,
        api_prefix: "/api".to_string(),
    }
}

/// Single-connection pool so every query sees the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    run_migrations(&pool).await.expect("migrations");
    pool
}

macro_rules! test_app {
    ($pool:expr, $config:expr) => {{
        let config = $config.clone();
        test::init_service(
            App::new()
                .app_data(Data::new($pool.clone()))
                .app_data(Data::new($config.clone()))
                .configure(move |cfg| routes::configure(cfg, config.clone())),
        )
        .await
    }};
}

fn peer() -> SocketAddr {
    "127.0.0.1:8080".parse().unwrap()
}

fn post_json(path: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(path)
        .peer_addr(peer())
        .set_json(body)
}

fn put_json(path: &str, token: &str, body: Value) -> test::TestRequest {
    test::TestRequest::put()
        .uri(path)
        .peer_addr(peer())
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(body)
}

fn get(path: &str, token: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(path)
        .peer_addr(peer())
        .insert_header(("Authorization", format!("Bearer {}", token)))
}

fn authed_post_json(path: &str, token: &str, body: Value) -> test::TestRequest {
    post_json(path, body).insert_header(("Authorization", format!("Bearer {}", token)))
}

fn signup_body(code: &str, name: &str, email: &str, password: &str) -> Value {
    json!({
        "employeeId": code,
        "name": name,
        "email": email,
        "password": password,
    })
}

macro_rules! signup {
    ($app:expr, $code:expr, $name:expr, $email:expr, $password:expr) => {{
        let resp = test::call_service(
            &$app,
            post_json("/api/signup", signup_body($code, $name, $email, $password)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201, "signup should succeed");
        let body: Value = test::read_body_json(resp).await;
        body["id"].as_i64().expect("signup returns new id")
    }};
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let resp = test::call_service(
            &$app,
            post_json("/api/login", json!({ "email": $email, "password": $password }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200, "login should succeed");
        let body: Value = test::read_body_json(resp).await;
        (
            body["token"].as_str().expect("token").to_string(),
            body["user"].clone(),
        )
    }};
}

async fn promote_to_admin(pool: &SqlitePool, user_id: i64) {
    sqlx::query("UPDATE users SET role = 'Admin' WHERE id = ?")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("promote");
}

#[actix_web::test]
async fn signup_is_unique_per_employee_id_and_email() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");

    // same employee id, fresh email
    let resp = test::call_service(
        &app,
        post_json("/api/signup", signup_body("E100", "Bob", "bob@x.com", "pw2")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    // fresh employee id, same email
    let resp = test::call_service(
        &app,
        post_json("/api/signup", signup_body("E101", "Bob", "ann@x.com", "pw2")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_web::test]
async fn signup_rejects_empty_fields() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let resp = test::call_service(
        &app,
        post_json("/api/signup", signup_body("E100", "Ann", "ann@x.com", "")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn login_issues_decodable_token_and_strips_credential() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let id = signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, user) = login!(app, "ann@x.com", "pw1");

    let claims = verify_token(&token, TEST_SECRET).expect("token decodes with test key");
    assert_eq!(claims.user_id, id);
    assert_eq!(claims.role, "Employee");

    // self-service signups are always employees, credential never serialized
    assert_eq!(user["role"], "Employee");
    assert_eq!(user["department"], "General");
    assert_eq!(user["salary"], 50000);
    assert!(user.get("password").is_none());
}

#[actix_web::test]
async fn login_with_wrong_password_fails() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        post_json("/api/login", json!({ "email": "ann@x.com", "password": "wrong" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AUTH_ERROR");
}

#[actix_web::test]
async fn admin_portal_rejects_employee_accounts() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");

    // correct credentials, wrong portal
    let resp = test::call_service(
        &app,
        post_json(
            "/api/login",
            json!({ "email": "ann@x.com", "password": "pw1", "isAdminLogin": true }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn admin_portal_accepts_admin_accounts() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let id = signup!(app, "A1", "Root", "root@x.com", "pw1");
    promote_to_admin(&pool, id).await;

    let resp = test::call_service(
        &app,
        post_json(
            "/api/login",
            json!({ "email": "root@x.com", "password": "pw1", "isAdminLogin": true }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let claims = verify_token(body["token"].as_str().unwrap(), TEST_SECRET).unwrap();
    assert_eq!(claims.role, "Admin");
}

#[actix_web::test]
async fn reset_password_requires_matching_pair_and_rotates_credential() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");

    // mismatched pair
    let resp = test::call_service(
        &app,
        post_json(
            "/api/reset-password",
            json!({ "email": "ann@x.com", "employeeId": "E999", "newPassword": "pw2" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VERIFICATION_FAILED");

    // matching pair
    let resp = test::call_service(
        &app,
        post_json(
            "/api/reset-password",
            json!({ "email": "ann@x.com", "employeeId": "E100", "newPassword": "pw2" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // old password dead, new password live
    let resp = test::call_service(
        &app,
        post_json("/api/login", json!({ "email": "ann@x.com", "password": "pw1" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    login!(app, "ann@x.com", "pw2");
}

#[actix_web::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/profile")
            .peer_addr(peer())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    // a verification failure is a 401, not a server error
    let resp = test::call_service(&app, get("/api/profile", "not-a-jwt").to_request()).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AUTH_ERROR");
}

#[actix_web::test]
async fn profile_returns_own_sanitized_record() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(&app, get("/api/profile", &token).to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["employeeId"], "E100");
    assert_eq!(body["name"], "Ann");
    assert!(body.get("password").is_none());
}

#[actix_web::test]
async fn update_by_non_owner_non_admin_is_forbidden_and_changes_nothing() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let bob_id = signup!(app, "E101", "Bob", "bob@x.com", "pw2");
    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    let (bob_token, _) = login!(app, "bob@x.com", "pw2");

    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/users/{}", bob_id),
            &ann_token,
            json!({ "name": "Hacked" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    let resp = test::call_service(&app, get("/api/profile", &bob_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Bob");
}

#[actix_web::test]
async fn self_update_applies_open_fields_and_ignores_admin_only_fields() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let id = signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/users/{}", id),
            &token,
            json!({ "phone": "555-0101", "salary": 999999, "jobTitle": "CTO" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(&app, get("/api/profile", &token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["phone"], "555-0101");
    // admin-only fields were ignored, not applied and not errored
    assert_eq!(body["salary"], 50000);
    assert_eq!(body["jobTitle"], Value::Null);
}

#[actix_web::test]
async fn admin_only_patch_from_employee_is_a_no_op_success() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let id = signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        put_json(&format!("/api/users/{}", id), &token, json!({ "salary": 999999 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No changes");
}

#[actix_web::test]
async fn admin_can_set_job_title_and_salary_on_any_user() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let ann_id = signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let admin_id = signup!(app, "A1", "Root", "root@x.com", "pw9");
    promote_to_admin(&pool, admin_id).await;
    let (admin_token, _) = login!(app, "root@x.com", "pw9");

    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/users/{}", ann_id),
            &admin_token,
            json!({ "jobTitle": "Engineer", "salary": 70000 }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    let resp = test::call_service(&app, get("/api/profile", &ann_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["jobTitle"], "Engineer");
    assert_eq!(body["salary"], 70000);
}

#[actix_web::test]
async fn password_change_via_patch_takes_effect() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let id = signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        put_json(&format!("/api/users/{}", id), &token, json!({ "password": "pw2" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        post_json("/api/login", json!({ "email": "ann@x.com", "password": "pw1" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    login!(app, "ann@x.com", "pw2");
}

#[actix_web::test]
async fn update_email_to_taken_address_conflicts() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let ann_id = signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    signup!(app, "E101", "Bob", "bob@x.com", "pw2");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/users/{}", ann_id),
            &token,
            json!({ "email": "bob@x.com" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn user_directory_is_admin_only_and_credential_free() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let admin_id = signup!(app, "A1", "Root", "root@x.com", "pw9");
    promote_to_admin(&pool, admin_id).await;

    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    let resp = test::call_service(&app, get("/api/users", &ann_token).to_request()).await;
    assert_eq!(resp.status(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");

    let (admin_token, _) = login!(app, "root@x.com", "pw9");
    let resp = test::call_service(&app, get("/api/users", &admin_token).to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let users = body.as_array().expect("array of users");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("employeeId").is_some());
    }
}

#[actix_web::test]
async fn check_in_then_out_sets_both_times() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        authed_post_json(
            "/api/attendance/checkin",
            &token,
            json!({ "date": "2026-08-28", "checkIn": "09:02 AM" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        put_json(
            "/api/attendance/checkout",
            &token,
            json!({ "date": "2026-08-28", "checkOut": "05:31 PM" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(&app, get("/api/attendance", &token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "Present");
    assert_eq!(records[0]["checkIn"], "09:02 AM");
    assert_eq!(records[0]["checkOut"], "05:31 PM");
}

#[actix_web::test]
async fn duplicate_check_in_for_same_date_is_rejected() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let body = json!({ "date": "2026-08-28", "checkIn": "09:02 AM" });
    let resp = test::call_service(
        &app,
        authed_post_json("/api/attendance/checkin", &token, body.clone()).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        authed_post_json("/api/attendance/checkin", &token, body).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn check_out_without_check_in_is_a_silent_no_op() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        put_json(
            "/api/attendance/checkout",
            &token,
            json!({ "date": "2026-08-28", "checkOut": "05:31 PM" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // nothing was created or mutated
    let resp = test::call_service(&app, get("/api/attendance", &token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn admin_attendance_listing_includes_owner_identity() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let admin_id = signup!(app, "A1", "Root", "root@x.com", "pw9");
    promote_to_admin(&pool, admin_id).await;

    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    test::call_service(
        &app,
        authed_post_json(
            "/api/attendance/checkin",
            &ann_token,
            json!({ "date": "2026-08-28", "checkIn": "09:02 AM" }),
        )
        .to_request(),
    )
    .await;

    let (admin_token, _) = login!(app, "root@x.com", "pw9");
    let resp = test::call_service(&app, get("/api/attendance", &admin_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Ann");
    assert_eq!(records[0]["employeeId"], "E100");

    // employee sees only their own rows, without the join columns
    let resp = test::call_service(&app, get("/api/attendance", &ann_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap()[0].get("name").is_none());
}

#[actix_web::test]
async fn new_leave_request_is_pending_and_owner_scoped() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    signup!(app, "E101", "Bob", "bob@x.com", "pw2");
    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    let (bob_token, _) = login!(app, "bob@x.com", "pw2");

    let resp = test::call_service(
        &app,
        authed_post_json(
            "/api/leaves",
            &ann_token,
            json!({
                "type": "Sick",
                "startDate": "2026-09-01",
                "endDate": "2026-09-03",
                "remarks": "flu"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(&app, get("/api/leaves", &ann_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let leaves = body.as_array().unwrap();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0]["status"], "Pending");
    assert_eq!(leaves[0]["type"], "Sick");

    // not visible to another employee
    let resp = test::call_service(&app, get("/api/leaves", &bob_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn leave_with_inverted_date_range_is_rejected() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let (token, _) = login!(app, "ann@x.com", "pw1");

    let resp = test::call_service(
        &app,
        authed_post_json(
            "/api/leaves",
            &token,
            json!({ "type": "Casual", "startDate": "2026-09-03", "endDate": "2026-09-01" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn leave_decision_is_admin_only_and_terminal() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let admin_id = signup!(app, "A1", "Root", "root@x.com", "pw9");
    promote_to_admin(&pool, admin_id).await;

    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    test::call_service(
        &app,
        authed_post_json(
            "/api/leaves",
            &ann_token,
            json!({ "type": "Sick", "startDate": "2026-09-01", "endDate": "2026-09-03" }),
        )
        .to_request(),
    )
    .await;

    let (admin_token, _) = login!(app, "root@x.com", "pw9");
    let leaves: Value = {
        let resp = test::call_service(&app, get("/api/leaves", &admin_token).to_request()).await;
        test::read_body_json(resp).await
    };
    let leave_id = leaves.as_array().unwrap()[0]["id"].as_i64().unwrap();

    // non-admin may not decide
    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/leaves/{}", leave_id),
            &ann_token,
            json!({ "status": "Approved" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    // admin approves
    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/leaves/{}", leave_id),
            &admin_token,
            json!({ "status": "Approved" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(&app, get("/api/leaves", &ann_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap()[0]["status"], "Approved");

    // approved is terminal
    let resp = test::call_service(
        &app,
        put_json(
            &format!("/api/leaves/{}", leave_id),
            &admin_token,
            json!({ "status": "Rejected" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn leave_decision_only_accepts_terminal_states() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    let admin_id = signup!(app, "A1", "Root", "root@x.com", "pw9");
    promote_to_admin(&pool, admin_id).await;
    let (admin_token, _) = login!(app, "root@x.com", "pw9");

    // Pending (or anything unknown) is not a valid decision
    let resp = test::call_service(
        &app,
        put_json("/api/leaves/1", &admin_token, json!({ "status": "Pending" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn admin_leave_listing_includes_requester_identity() {
    let pool = test_pool().await;
    let config = test_config();
    let app = test_app!(pool, config);

    signup!(app, "E100", "Ann", "ann@x.com", "pw1");
    let admin_id = signup!(app, "A1", "Root", "root@x.com", "pw9");
    promote_to_admin(&pool, admin_id).await;

    let (ann_token, _) = login!(app, "ann@x.com", "pw1");
    for (start, end) in [("2026-09-01", "2026-09-02"), ("2026-09-10", "2026-09-11")] {
        test::call_service(
            &app,
            authed_post_json(
                "/api/leaves",
                &ann_token,
                json!({ "type": "Casual", "startDate": start, "endDate": end }),
            )
            .to_request(),
        )
        .await;
    }

    let (admin_token, _) = login!(app, "root@x.com", "pw9");
    let resp = test::call_service(&app, get("/api/leaves", &admin_token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let leaves = body.as_array().unwrap();
    assert_eq!(leaves.len(), 2);
    // newest first by id
    assert!(leaves[0]["id"].as_i64().unwrap() > leaves[1]["id"].as_i64().unwrap());
    assert_eq!(leaves[0]["name"], "Ann");
    assert_eq!(leaves[0]["employeeId"], "E100");
}
