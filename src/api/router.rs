use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::handlers::{admin, auth, diagnosis, inference, profile, records, reports, theme};
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::SCREEN_HEADER;
use crate::config::CorsConfig;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let body_limit = DefaultBodyLimit::max(state.config.server.max_body_bytes);

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Inference backend, also served under /api
        .merge(inference::create_inference_router())
        .nest("/api", inference::create_inference_router())
        // Screens
        .nest("/auth", auth::create_auth_router())
        .nest("/diagnosis", diagnosis::create_diagnosis_router())
        .nest("/records", records::create_records_router())
        .nest("/profile", profile::create_profile_router())
        .nest("/reports", reports::create_reports_router())
        .nest("/admin", admin::create_admin_router())
        .nest("/theme", theme::create_theme_router())
        // Add state and middleware
        .with_state(state)
        .layer(body_limit)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}

/// `*` allows any origin; otherwise only the listed ones
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(&config.allowed_origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(SCREEN_HEADER)])
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{AppConfig, SimulationConfig};

    const BOUNDARY: &str = "lesion-boundary";

    fn app() -> Router {
        app_with(SimulationConfig::instant())
    }

    fn app_with(simulation: SimulationConfig) -> Router {
        let config = AppConfig {
            simulation,
            ..AppConfig::default()
        };
        create_router(crate::create_app_state(&config))
    }

    /// Short operations take 200 ms, enough to overlap two requests
    fn slow_app() -> Router {
        app_with(SimulationConfig {
            short_delay_ms: 200,
            long_delay_ms: 0,
        })
    }

    fn login_request(screen: Option<&str>, email: &str, password: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(screen) = screen {
            builder = builder.header(SCREEN_HEADER, screen);
        }
        builder
            .body(Body::from(
                json!({"email": email, "password": password, "role": "doctor"}).to_string(),
            ))
            .unwrap()
    }

    /// Send `first` in the background, then `second` once `first` is pending
    async fn overlapping(
        app: Router,
        first: Request<Body>,
        second: Request<Body>,
    ) -> ((StatusCode, Value), (StatusCode, Value)) {
        let background = tokio::spawn(send(app.clone(), first));
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let second = send(app, second).await;
        (background.await.unwrap(), second)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Multipart body with an optional file part of `size` bytes and some text parts
    fn multipart_request(
        uri: &str,
        file: Option<(&str, &str, usize)>,
        fields: &[(&str, &str)],
    ) -> Request<Body> {
        let mut body = Vec::new();

        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }

        if let Some((file_name, content_type, size)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend(std::iter::repeat_n(b'x', size));
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        for uri in ["/health", "/api/health"] {
            let (status, body) = send(app(), get_request(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "ok");
            assert_eq!(body["model_loaded"], false);
        }
    }

    #[tokio::test]
    async fn test_live_and_request_id() {
        let response = app().oneshot(get_request("/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_login_doctor() {
        let (status, body) = send(
            app(),
            json_request(
                "POST",
                "/auth/login",
                json!({"email": "doctor@medical.com", "password": "demo123", "role": "doctor"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome back! Logged in as doctor");
        assert_eq!(body["data"]["role"], "doctor");
        assert_eq!(body["operation"]["state"], "success");
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let (status, body) = send(
            app(),
            json_request(
                "POST",
                "/auth/login",
                json!({"email": "doctor@medical.com", "password": "demo1234", "role": "doctor"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body["error"]["message"],
            "Invalid credentials. Try doctor@medical.com / demo123"
        );
        assert_eq!(body["error"]["errors"]["email"]["kind"], "credentials_invalid");
        assert_eq!(body["error"]["errors"]["password"]["kind"], "credentials_invalid");
    }

    #[tokio::test]
    async fn test_malformed_json_uses_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_save_patient_validation() {
        let (status, body) = send(
            app(),
            json_request(
                "POST",
                "/diagnosis/patient",
                json!({"patient_id": "PT2024001", "age": "121", "sex": "female", "lesion_site": "back"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please fill in all required fields correctly");
        assert_eq!(body["error"]["errors"]["patient_id"]["kind"], "format_invalid");
        assert_eq!(body["error"]["errors"]["age"]["message"], "Age must be between 0-120");
    }

    #[tokio::test]
    async fn test_records_filter() {
        let (status, body) = send(app(), get_request("/records?query=garcia&status=all")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["records"][0]["name"], "Maria Garcia");

        let (status, body) = send(app(), get_request("/records?status=High%20Risk")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["total_records"], 8);
        assert_eq!(body["records"][1]["id"], "PT-2024-008");

        let (status, body) = send(app(), get_request("/records?status=urgent")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "status");
    }

    #[tokio::test]
    async fn test_record_by_id() {
        let (status, body) = send(app(), get_request("/records/PT-2024-003")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Moderate Risk");

        let (status, _) = send(app(), get_request("/records/PT-2024-999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_predict() {
        let (status, body) = send(
            app(),
            multipart_request("/predict", Some(("lesion.png", "image/png", 64)), &[]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["predicted_class"], "Melanoma");
        assert_eq!(body["probabilities"]["Melanoma"], 0.925);
    }

    #[tokio::test]
    async fn test_predict_rejections() {
        let (status, body) = send(app(), multipart_request("/api/predict", None, &[])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No image file provided");

        let (status, body) = send(
            app(),
            multipart_request("/predict", Some(("", "image/png", 64)), &[]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Empty filename");

        let (status, body) = send(
            app(),
            multipart_request("/gradcam", Some(("scan.gif", "image/gif", 64)), &[]),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            body["error"]["message"],
            "Invalid file type. Only JPEG and PNG are accepted"
        );
    }

    #[tokio::test]
    async fn test_gradcam() {
        let (status, body) = send(
            app(),
            multipart_request("/api/gradcam", Some(("lesion.jpg", "image/jpeg", 64)), &[]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["heatmap"], Value::Null);
        assert_eq!(body["message"], "Grad-CAM not yet implemented - model pending");
    }

    #[tokio::test]
    async fn test_image_size_floor() {
        let (status, body) = send(
            app(),
            multipart_request("/diagnosis/image", Some(("small.jpg", "image/jpeg", 10 * 1024 - 1)), &[]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["errors"]["image"]["kind"], "file_size_rejected");

        let (status, body) = send(
            app(),
            multipart_request("/diagnosis/image", Some(("ok.jpg", "image/jpeg", 10 * 1024)), &[]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Image uploaded successfully!");
        assert_eq!(body["data"]["size"], 10 * 1024);
    }

    #[tokio::test]
    async fn test_process_image() {
        let fields = [
            ("patient_id", "PT-2024-011"),
            ("age", "61"),
            ("sex", "other"),
            ("lesion_site", "face"),
        ];

        let (status, body) = send(
            app(),
            multipart_request("/diagnosis/process", Some(("lesion.jpg", "image/jpeg", 20 * 1024)), &fields),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Classification complete! Viewing results...");
        assert_eq!(body["data"]["predicted_class"], "Melanoma");
        assert_eq!(body["data"]["probabilities"][0]["rank"], 1);

        let (status, body) = send(app(), multipart_request("/diagnosis/process", None, &fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please upload a dermoscopic image first");
    }

    #[tokio::test]
    async fn test_profile_flow() {
        let app = app();

        let (status, body) = send(
            app.clone(),
            json_request("PUT", "/profile", json!({"name": "Dr. S. Johnson", "email": "sj@hospital.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Profile updated successfully!");

        let (_, body) = send(app.clone(), get_request("/profile")).await;
        assert_eq!(body["email"], "sj@hospital.com");

        let (status, body) = send(
            app,
            json_request(
                "POST",
                "/profile/password",
                json!({"current_password": "x", "new_password": "Password1", "confirm_password": "Password2"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["errors"]["confirm_password"]["message"], "Passwords do not match");
    }

    #[tokio::test]
    async fn test_report_export() {
        let (status, body) = send(
            app(),
            json_request("POST", "/reports/export", json!({"format": "json"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Report successfully exported as JSON!");

        let none = json!({"sections": {
            "patient_info": false, "diagnosis_results": false, "grad_cam": false,
            "recommendations": false, "technical_details": false
        }});
        let (status, body) = send(app(), json_request("POST", "/reports/preview", none)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please select at least one section to preview");
    }

    #[tokio::test]
    async fn test_admin_users() {
        let app = app();

        let (status, body) = send(
            app.clone(),
            json_request("POST", "/admin/users", json!({"name": "Dr. Ada Park", "email": "ada.p@hospital.com", "role": "doctor"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 5);

        let request = Request::builder()
            .method("DELETE")
            .uri("/admin/users/5")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User Dr. Ada Park has been deactivated");
        assert_eq!(body["data"]["status"], "inactive");

        let (_, body) = send(app, get_request("/admin/users")).await;
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn test_training_needs_dataset() {
        let app = app();
        let training = json!({"learning_rate": "0.001", "epochs": "50", "batch_size": 32, "optimizer": "adam"});

        let (status, body) = send(app.clone(), json_request("POST", "/admin/training", training.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["errors"]["dataset"]["message"],
            "Please upload a training dataset first"
        );

        let (status, body) = send(
            app.clone(),
            multipart_request("/admin/datasets", Some(("ham.zip", "application/zip", 128)), &[]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Dataset uploaded successfully!");

        let (status, body) = send(app, json_request("POST", "/admin/training", training)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Model training started successfully!");
        assert_eq!(body["data"]["batch_size"], 32);
    }

    #[tokio::test]
    async fn test_admin_static_views() {
        let (status, body) = send(app(), get_request("/admin/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total_diagnoses"], 1847);

        let (_, body) = send(app(), get_request("/admin/model")).await;
        assert_eq!(body["version"], "v2.3.1-ResNet50");
    }

    #[tokio::test]
    async fn test_theme_shared_across_requests() {
        let app = app();

        let (_, body) = send(app.clone(), get_request("/theme")).await;
        assert_eq!(body["theme"], "light");

        let request = Request::builder()
            .method("POST")
            .uri("/theme/toggle")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(app.clone(), request).await;
        assert_eq!(body["theme"], "dark");

        let (_, body) = send(app.clone(), get_request("/theme")).await;
        assert_eq!(body["theme"], "dark");

        let (status, body) = send(app, json_request("PUT", "/theme", json!({"theme": "light"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "light");
    }

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = parse_origins(&["http://localhost:3000".to_string(), "bad\norigin".to_string()]);
        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3000")]);
    }

    #[tokio::test]
    async fn test_concurrent_logins_from_different_clients() {
        let (first, second) = overlapping(
            slow_app(),
            login_request(Some("doctor-laptop"), "doctor@medical.com", "demo123"),
            login_request(Some("admin-desk"), "admin@medical.com", "admin123"),
        )
        .await;

        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(first.1["data"]["role"], "doctor");
        assert_eq!(second.0, StatusCode::OK);
        assert_eq!(second.1["data"]["role"], "admin");

        // without a screen header every request stands alone
        let (first, second) = overlapping(
            slow_app(),
            login_request(None, "doctor@medical.com", "demo123"),
            login_request(None, "doctor@medical.com", "demo123"),
        )
        .await;
        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(second.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_second_login_on_same_screen_conflicts() {
        let (first, second) = overlapping(
            slow_app(),
            login_request(Some("login-tab"), "doctor@medical.com", "demo123"),
            login_request(Some("login-tab"), "doctor@medical.com", "demo123"),
        )
        .await;

        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(second.0, StatusCode::CONFLICT);
        assert_eq!(second.1["error"]["code"], "operation_pending");
        assert_eq!(
            second.1["error"]["message"],
            "Operation 'login' is already in progress"
        );
    }

    #[tokio::test]
    async fn test_invalid_login_while_pending_gets_field_errors() {
        let (first, second) = overlapping(
            slow_app(),
            login_request(Some("login-tab"), "doctor@medical.com", "demo123"),
            login_request(Some("login-tab"), "", ""),
        )
        .await;

        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(second.0, StatusCode::BAD_REQUEST);
        assert_eq!(second.1["error"]["errors"]["email"]["kind"], "required_field_missing");
        assert_eq!(second.1["error"]["errors"]["password"]["kind"], "required_field_missing");
    }

    #[tokio::test]
    async fn test_invalid_screen_header() {
        let (status, body) = send(
            app(),
            login_request(Some("not a screen"), "doctor@medical.com", "demo123"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "x-screen-id");
    }

    #[tokio::test]
    async fn test_bad_path_parameter_uses_envelope() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/admin/users/abc")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["code"], "invalid_path_parameter");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/predict")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }
}
