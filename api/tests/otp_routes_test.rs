//! Route tests for the OTP endpoints against mock-backed application state.

use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;

use vi_api::app::AppState;
use vi_api::dto::auth::SendOtpRequest;
use vi_api::routes::auth::{send_otp::send_otp, verify_otp::verify_otp};
use vi_core::domain::entities::otp_code::OtpPurpose;
use vi_core::errors::DomainResult;
use vi_core::repositories::{MockOtpCodeRepository, MockUserRepository};
use vi_core::services::{AccountService, OtpMailer, OtpService, OtpServiceConfig, TokenService};
use vi_shared::config::JwtConfig;

/// Test mailer that records the last code instead of sending email
struct CapturingMailer {
    last_code: Mutex<Option<String>>,
}

impl CapturingMailer {
    fn new() -> Self {
        Self {
            last_code: Mutex::new(None),
        }
    }

    fn last_code(&self) -> Option<String> {
        self.last_code.lock().unwrap().clone()
    }
}

#[async_trait]
impl OtpMailer for CapturingMailer {
    async fn send_otp(&self, _to: &str, code: &str, _purpose: OtpPurpose) -> DomainResult<()> {
        *self.last_code.lock().unwrap() = Some(code.to_string());
        Ok(())
    }
}

type TestState = AppState<MockUserRepository, MockOtpCodeRepository, CapturingMailer>;

fn create_test_app_state() -> (TestState, Arc<CapturingMailer>) {
    let otp_repo = Arc::new(MockOtpCodeRepository::new());
    let mailer = Arc::new(CapturingMailer::new());
    let user_repo = Arc::new(MockUserRepository::new());

    let otp_service = Arc::new(OtpService::new(
        otp_repo,
        mailer.clone(),
        OtpServiceConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(&JwtConfig::new("test-secret")));
    let account_service = Arc::new(AccountService::new(user_repo, token_service));

    (AppState::new(otp_service, account_service), mailer)
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .route(
                    "/api/auth/send-otp",
                    web::post().to(send_otp::<
                        MockUserRepository,
                        MockOtpCodeRepository,
                        CapturingMailer,
                    >),
                )
                .route(
                    "/api/auth/verify-otp",
                    web::post().to(verify_otp::<
                        MockUserRepository,
                        MockOtpCodeRepository,
                        CapturingMailer,
                    >),
                ),
        )
        .await
    };
}

fn verify_body(email: &str, code: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "otp_code": code,
        "purpose": "login",
    })
}

/// A wrong code with valid shape, derived from the real one
fn wrong_code(code: &str) -> String {
    code.chars()
        .map(|c| if c == '0' { '1' } else { '0' })
        .collect()
}

#[actix_web::test]
async fn test_send_otp_success_without_leaking_code() {
    let (state, mailer) = create_test_app_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/send-otp")
        .set_json(SendOtpRequest {
            email: "user@example.com".to_string(),
            purpose: OtpPurpose::Login,
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let code = mailer.last_code().expect("mailer should have been invoked");

    let body = test::read_body(resp).await;
    let body_str = String::from_utf8(body.to_vec()).unwrap();
    assert!(body_str.contains("user@example.com"));
    assert!(!body_str.contains(&code));

    let json: serde_json::Value = serde_json::from_str(&body_str).unwrap();
    assert_eq!(json["success"], true);
    assert!(json.get("otp_code").is_none());
}

#[actix_web::test]
async fn test_send_otp_rejects_malformed_email() {
    let (state, _mailer) = create_test_app_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/send-otp")
        .set_json(serde_json::json!({"email": "not-an-email", "purpose": "login"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_send_otp_rejects_unknown_purpose() {
    let (state, _mailer) = create_test_app_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/send-otp")
        .set_json(serde_json::json!({"email": "a@b.com", "purpose": "password-reset"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_verify_otp_happy_path_consumes_code() {
    let (state, mailer) = create_test_app_state();
    let app = test_app!(state);

    let send = test::TestRequest::post()
        .uri("/api/auth/send-otp")
        .set_json(serde_json::json!({"email": "a@b.com", "purpose": "login"}))
        .to_request();
    assert_eq!(test::call_service(&app, send).await.status(), StatusCode::OK);

    let code = mailer.last_code().unwrap();

    let verify = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(verify_body("a@b.com", &code))
        .to_request();
    let resp = test::call_service(&app, verify).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Reuse of a consumed code is rejected
    let reuse = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(verify_body("a@b.com", &code))
        .to_request();
    let resp = test::call_service(&app, reuse).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "No valid OTP found");
}

#[actix_web::test]
async fn test_verify_otp_wrong_code_then_right_code() {
    let (state, mailer) = create_test_app_state();
    let app = test_app!(state);

    let send = test::TestRequest::post()
        .uri("/api/auth/send-otp")
        .set_json(serde_json::json!({"email": "a@b.com", "purpose": "login"}))
        .to_request();
    assert_eq!(test::call_service(&app, send).await.status(), StatusCode::OK);

    let code = mailer.last_code().unwrap();

    let wrong = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(verify_body("a@b.com", &wrong_code(&code)))
        .to_request();
    let resp = test::call_service(&app, wrong).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Invalid OTP code");

    let right = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(verify_body("a@b.com", &code))
        .to_request();
    let resp = test::call_service(&app, right).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_otp_record_removed_after_three_failures() {
    let (state, mailer) = create_test_app_state();
    let app = test_app!(state);

    let send = test::TestRequest::post()
        .uri("/api/auth/send-otp")
        .set_json(serde_json::json!({"email": "a@b.com", "purpose": "login"}))
        .to_request();
    assert_eq!(test::call_service(&app, send).await.status(), StatusCode::OK);

    let code = mailer.last_code().unwrap();
    let bad = wrong_code(&code);

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/auth/verify-otp")
            .set_json(verify_body("a@b.com", &bad))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["message"], "Invalid OTP code");
    }

    // The record is gone, so even the correct code now reports "not found"
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(verify_body("a@b.com", &code))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "No valid OTP found");
}

#[actix_web::test]
async fn test_verify_otp_rejects_short_code() {
    let (state, _mailer) = create_test_app_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(verify_body("a@b.com", "123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
