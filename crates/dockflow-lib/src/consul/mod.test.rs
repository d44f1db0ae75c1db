// Tests for the Consul key-value client

use super::*;
use crate::networking::NetworkingConfig;
use mockito::{Mock, Server, ServerGuard};

const SERVICE_NAME: &str = "myService";
const NEVER_DEPLOYED: &str = "SERVICE_NEVER_DEPLOYED_BEFORE";
const CONSUL_SCALE: u32 = 4;
const PUT_SCALE_RESPONSE: &str = "PUT_SCALE";
const PUT_COLOR_RESPONSE: &str = "PUT_COLOR";
const WRONG_URL: &str = "WRONG_URL";

/// Server answering like Consul for `myService` (scale 4, color blue)
struct ConsulFixture {
    server: ServerGuard,
    client: LiveConsulClient,
    _mocks: Vec<Mock>,
}

fn live_client() -> LiveConsulClient {
    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    LiveConsulClient::new(Arc::new(networking))
}

async fn fixture() -> ConsulFixture {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();

    mocks.push(
        server
            .mock("GET", "/v1/kv/docker-flow/myService/scale?raw")
            .with_body(CONSUL_SCALE.to_string())
            .create_async()
            .await,
    );
    mocks.push(
        server
            .mock("GET", "/v1/kv/docker-flow/myService/color?raw")
            .with_body(BLUE_COLOR)
            .create_async()
            .await,
    );
    // Consul answers 404 for keys that were never written
    mocks.push(
        server
            .mock("GET", "/v1/kv/docker-flow/SERVICE_NEVER_DEPLOYED_BEFORE/scale?raw")
            .with_status(404)
            .create_async()
            .await,
    );
    mocks.push(
        server
            .mock("GET", "/v1/kv/docker-flow/SERVICE_NEVER_DEPLOYED_BEFORE/color?raw")
            .with_status(200)
            .with_body("")
            .create_async()
            .await,
    );
    mocks.push(
        server
            .mock("PUT", "/v1/kv/docker-flow/myService/scale")
            .with_body(PUT_SCALE_RESPONSE)
            .create_async()
            .await,
    );
    mocks.push(
        server
            .mock("PUT", "/v1/kv/docker-flow/myService/color")
            .with_body(PUT_COLOR_RESPONSE)
            .create_async()
            .await,
    );

    ConsulFixture {
        server,
        client: live_client(),
        _mocks: mocks,
    }
}

// ============================================================================
// Key paths
// ============================================================================

#[test]
fn test_key_urls() {
    assert_eq!(
        ServiceKey::Scale.url("http://consul:8500", "api"),
        "http://consul:8500/v1/kv/docker-flow/api/scale"
    );
    assert_eq!(
        ServiceKey::Color.url("http://consul:8500/", "api"),
        "http://consul:8500/v1/kv/docker-flow/api/color"
    );
}

#[test]
fn test_service_name_is_a_single_segment() {
    assert_eq!(ServiceKey::Scale.path("team/api"), "docker-flow/team%2Fapi/scale");
    assert_eq!(ServiceKey::Color.path("a b?"), "docker-flow/a%20b%3F/color");
    assert_eq!(
        ServiceKey::Scale.path(NEVER_DEPLOYED),
        "docker-flow/SERVICE_NEVER_DEPLOYED_BEFORE/scale"
    );
}

// ============================================================================
// get_scale_calc
// ============================================================================

#[tokio::test]
async fn test_get_scale_calc_returns_1_when_never_deployed() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&f.server.url(), NEVER_DEPLOYED, "")
        .await
        .unwrap();

    assert_eq!(actual, 1);
}

#[tokio::test]
async fn test_get_scale_calc_returns_number_from_consul() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&f.server.url(), SERVICE_NAME, "")
        .await
        .unwrap();

    assert_eq!(actual, CONSUL_SCALE);
}

#[tokio::test]
async fn test_get_scale_calc_returns_error_from_http_get() {
    let client = live_client();

    let result = client.get_scale_calc(WRONG_URL, SERVICE_NAME, "").await;

    assert!(matches!(result, Err(ConsulError::RequestFailed { .. })));
}

#[tokio::test]
async fn test_get_scale_calc_returns_scale_argument() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&f.server.url(), SERVICE_NAME, "7")
        .await
        .unwrap();

    assert_eq!(actual, 7);
}

#[tokio::test]
async fn test_get_scale_calc_increments_scale() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&f.server.url(), SERVICE_NAME, "+2")
        .await
        .unwrap();

    assert_eq!(actual, CONSUL_SCALE + 2);
}

#[tokio::test]
async fn test_get_scale_calc_decrements_scale() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&f.server.url(), SERVICE_NAME, "-2")
        .await
        .unwrap();

    assert_eq!(actual, CONSUL_SCALE - 2);
}

#[tokio::test]
async fn test_get_scale_calc_returns_1_when_scale_is_negative_or_zero() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&f.server.url(), SERVICE_NAME, "-100")
        .await
        .unwrap();

    assert_eq!(actual, 1);
}

#[tokio::test]
async fn test_get_scale_calc_accepts_trailing_slash_in_base_url() {
    let f = fixture().await;

    let actual = f
        .client
        .get_scale_calc(&format!("{}/", f.server.url()), SERVICE_NAME, "+1")
        .await
        .unwrap();

    assert_eq!(actual, CONSUL_SCALE + 1);
}

#[tokio::test]
async fn test_get_scale_calc_treats_corrupted_value_as_zero() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/kv/docker-flow/broken/scale?raw")
        .with_body("not-a-number")
        .create_async()
        .await;

    let client = live_client();
    assert_eq!(
        client.get_scale_calc(&server.url(), "broken", "").await.unwrap(),
        1
    );
    assert_eq!(
        client.get_scale_calc(&server.url(), "broken", "+3").await.unwrap(),
        3
    );
}

#[tokio::test]
async fn test_get_scale_calc_rejects_bad_delta_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/kv/docker-flow/myService/scale?raw")
        .with_body("4")
        .expect(0)
        .create_async()
        .await;

    let result = live_client()
        .get_scale_calc(&server.url(), SERVICE_NAME, "+lots")
        .await;

    assert!(matches!(result, Err(ConsulError::InvalidScaleDelta { .. })));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_scale_calc_surfaces_server_errors() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/kv/docker-flow/myService/scale?raw")
        .with_status(500)
        .with_body("rpc error")
        .create_async()
        .await;

    let result = live_client()
        .get_scale_calc(&server.url(), SERVICE_NAME, "")
        .await;

    match result {
        Err(ConsulError::UnexpectedStatus { status, body, .. }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "rpc error");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_scale_calc_returns_error_when_unreachable() {
    let result = live_client()
        .get_scale_calc("http://127.0.0.1:1", SERVICE_NAME, "")
        .await;

    assert!(matches!(result, Err(ConsulError::RequestFailed { .. })));
}

// ============================================================================
// get_color / get_next_color
// ============================================================================

#[tokio::test]
async fn test_get_color_returns_green_when_never_deployed() {
    let f = fixture().await;

    let actual = f
        .client
        .get_color(&f.server.url(), NEVER_DEPLOYED)
        .await
        .unwrap();

    assert_eq!(actual, GREEN_COLOR);
}

#[tokio::test]
async fn test_get_color_returns_service_color() {
    let f = fixture().await;

    let actual = f
        .client
        .get_color(&f.server.url(), SERVICE_NAME)
        .await
        .unwrap();

    assert_eq!(actual, BLUE_COLOR);
}

#[tokio::test]
async fn test_get_color_returns_error_from_http_get() {
    let result = live_client().get_color(WRONG_URL, SERVICE_NAME).await;

    assert!(result.is_err());
}

#[test]
fn test_get_next_color_returns_blue_when_green() {
    assert_eq!(live_client().get_next_color(GREEN_COLOR), BLUE_COLOR);
}

#[test]
fn test_get_next_color_returns_green_when_blue() {
    assert_eq!(live_client().get_next_color(BLUE_COLOR), GREEN_COLOR);
}

// ============================================================================
// put_scale / put_color
// ============================================================================

#[tokio::test]
async fn test_put_scale_puts_to_consul() {
    let f = fixture().await;

    let actual = f
        .client
        .put_scale(&f.server.url(), SERVICE_NAME, 34)
        .await
        .unwrap();

    assert_eq!(actual, PUT_SCALE_RESPONSE);
}

#[tokio::test]
async fn test_put_scale_sends_value_as_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/kv/docker-flow/myService/scale")
        .match_body("34")
        .with_body("true")
        .expect(1)
        .create_async()
        .await;

    let actual = live_client()
        .put_scale(&server.url(), SERVICE_NAME, 34)
        .await
        .unwrap();

    assert_eq!(actual, "true");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_put_scale_returns_error_from_http_put() {
    let result = live_client().put_scale(WRONG_URL, SERVICE_NAME, 45).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_put_color_puts_to_consul() {
    let f = fixture().await;

    let actual = f
        .client
        .put_color(&f.server.url(), SERVICE_NAME, "orange")
        .await
        .unwrap();

    assert_eq!(actual, PUT_COLOR_RESPONSE);
}

#[tokio::test]
async fn test_put_color_returns_error_from_http_put() {
    let result = live_client().put_color(WRONG_URL, SERVICE_NAME, "purple").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_put_color_surfaces_rejected_write() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", "/v1/kv/docker-flow/myService/color")
        .with_status(403)
        .with_body("Permission denied")
        .create_async()
        .await;

    let result = live_client()
        .put_color(&server.url(), SERVICE_NAME, BLUE_COLOR)
        .await;

    assert!(matches!(
        result,
        Err(ConsulError::UnexpectedStatus { status: StatusCode::FORBIDDEN, .. })
    ));
}

// ============================================================================
// Mock client
// ============================================================================

#[tokio::test]
async fn test_mock_round_trips_writes() {
    let mock = MockConsulClient::new()
        .with_value(SERVICE_NAME, ServiceKey::Scale, "4")
        .await;

    assert_eq!(mock.get_scale_calc("", SERVICE_NAME, "+1").await.unwrap(), 5);
    assert_eq!(mock.get_color("", SERVICE_NAME).await.unwrap(), GREEN_COLOR);

    mock.put_color("", SERVICE_NAME, BLUE_COLOR).await.unwrap();
    assert_eq!(mock.get_color("", SERVICE_NAME).await.unwrap(), BLUE_COLOR);
    assert_eq!(
        mock.value(SERVICE_NAME, ServiceKey::Color).await.as_deref(),
        Some(BLUE_COLOR)
    );
}

#[tokio::test]
async fn test_mock_unreachable_fails_every_call() {
    let mock = MockConsulClient::new().unreachable();

    assert!(mock.get_scale_calc("x", SERVICE_NAME, "").await.is_err());
    assert!(mock.get_color("x", SERVICE_NAME).await.is_err());
    assert!(mock.put_scale("x", SERVICE_NAME, 2).await.is_err());
    assert!(mock.put_color("x", SERVICE_NAME, "blue").await.is_err());
}
