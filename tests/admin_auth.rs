use axum::{
    extract::FromRequestParts,
    http::{Request, StatusCode, header},
    response::IntoResponse,
};
use skyticket_api::{
    config::AppConfig,
    error::AppError,
    middleware::auth::AdminAuth,
    state::AppState,
    store::Inventory,
};

fn test_state() -> AppState {
    AppState::with_inventory(
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            admin_token: "test-admin-token".into(),
            seed_demo_flights: false,
        },
        Inventory::new(),
    )
}

async fn extract(state: &AppState, auth_header: Option<&str>) -> Result<AdminAuth, AppError> {
    let mut builder = Request::builder().uri("/api/admin/statistics");
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let (mut parts, _) = builder.body(()).expect("request").into_parts();
    <AdminAuth as FromRequestParts<AppState>>::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn admin_gate_accepts_only_the_configured_token() {
    let state = test_state();

    extract(&state, Some("Bearer test-admin-token"))
        .await
        .expect("configured token");

    let err = extract(&state, Some("Bearer wrong-token"))
        .await
        .expect_err("wrong token");
    assert!(matches!(err, AppError::Forbidden));

    let err = extract(&state, None).await.expect_err("missing header");
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = extract(&state, Some("Basic dXNlcg=="))
        .await
        .expect_err("wrong scheme");
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn errors_map_to_kinds_and_status_codes() {
    let cases = [
        (AppError::NotFound, "NOT_FOUND", StatusCode::NOT_FOUND),
        (
            AppError::SeatUnavailable,
            "SEAT_UNAVAILABLE",
            StatusCode::CONFLICT,
        ),
        (
            AppError::AlreadyCancelled,
            "ALREADY_CANCELLED",
            StatusCode::CONFLICT,
        ),
        (
            AppError::InvalidInput("missing field".into()),
            "INVALID_INPUT",
            StatusCode::BAD_REQUEST,
        ),
        (AppError::Forbidden, "FORBIDDEN", StatusCode::FORBIDDEN),
    ];

    for (err, kind, status) in cases {
        assert_eq!(err.kind(), kind);
        assert_eq!(err.into_response().status(), status);
    }
}
