use dockflow_lib::application::{Commands, execute_command_with_client};
use dockflow_lib::consul::{ConsulClient, LiveConsulClient};
use dockflow_lib::networking::{NetworkingConfig, NetworkingManager};
use mockito::Server;
use std::sync::Arc;

fn live_client() -> LiveConsulClient {
    let networking = NetworkingManager::new(NetworkingConfig {
        timeout_seconds: 5,
        trace_requests: true,
    })
    .unwrap();
    LiveConsulClient::new(Arc::new(networking))
}

#[tokio::test]
async fn test_blue_green_switch_against_http_store() {
    let mut server = Server::new_async().await;

    let read_color = server
        .mock("GET", "/v1/kv/docker-flow/web/color?raw")
        .with_body("green")
        .expect(1)
        .create_async()
        .await;
    let write_color = server
        .mock("PUT", "/v1/kv/docker-flow/web/color")
        .match_body("blue")
        .with_body("true")
        .expect(1)
        .create_async()
        .await;

    let client = live_client();
    let mut out = Vec::new();
    execute_command_with_client(
        Commands::NextColor {
            service: "web".to_string(),
            write: true,
        },
        &server.url(),
        &client,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "blue\n");
    read_color.assert_async().await;
    write_color.assert_async().await;
}

#[tokio::test]
async fn test_scale_up_and_store_against_http_store() {
    let mut server = Server::new_async().await;

    let _read_scale = server
        .mock("GET", "/v1/kv/docker-flow/web/scale?raw")
        .with_body("3")
        .create_async()
        .await;
    let write_scale = server
        .mock("PUT", "/v1/kv/docker-flow/web/scale")
        .match_body("5")
        .with_body("true")
        .expect(1)
        .create_async()
        .await;

    let client = live_client();
    let scale = client.get_scale_calc(&server.url(), "web", "+2").await.unwrap();
    let response = client.put_scale(&server.url(), "web", scale).await.unwrap();

    assert_eq!(scale, 5);
    assert_eq!(response, "true");
    write_scale.assert_async().await;
}

#[tokio::test]
async fn test_every_operation_fails_on_invalid_base_url() {
    let client = live_client();

    assert!(client.get_scale_calc("WRONG_URL", "web", "").await.is_err());
    assert!(client.get_color("WRONG_URL", "web").await.is_err());
    assert!(client.put_scale("WRONG_URL", "web", 2).await.is_err());
    assert!(client.put_color("WRONG_URL", "web", "blue").await.is_err());
}
