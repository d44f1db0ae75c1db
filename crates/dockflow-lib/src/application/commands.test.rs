use super::*;
use crate::consul::{MockConsulClient, ServiceKey};

const BASE_URL: &str = "http://consul:8500";

async fn run(command: Commands, client: &MockConsulClient) -> Result<String> {
    let mut out = Vec::new();
    execute_command_with_client(command, BASE_URL, client, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn test_scale_prints_calculated_value() {
    let client = MockConsulClient::new()
        .with_value("api", ServiceKey::Scale, "4")
        .await;

    let output = run(
        Commands::Scale {
            service: "api".to_string(),
            delta: Some("+2".to_string()),
            write: false,
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(output, "6\n");
    assert_eq!(client.value("api", ServiceKey::Scale).await.as_deref(), Some("4"));
}

#[tokio::test]
async fn test_scale_write_stores_result() {
    let client = MockConsulClient::new()
        .with_value("api", ServiceKey::Scale, "4")
        .await;

    let output = run(
        Commands::Scale {
            service: "api".to_string(),
            delta: Some("-100".to_string()),
            write: true,
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(output, "1\n");
    assert_eq!(client.value("api", ServiceKey::Scale).await.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_scale_defaults_to_one_for_new_service() {
    let client = MockConsulClient::new();

    let output = run(
        Commands::Scale {
            service: "fresh".to_string(),
            delta: None,
            write: false,
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(output, "1\n");
}

#[tokio::test]
async fn test_scale_reports_bad_delta() {
    let client = MockConsulClient::new();

    let err = run(
        Commands::Scale {
            service: "api".to_string(),
            delta: Some("twice".to_string()),
            write: true,
        },
        &client,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Failed to calculate scale for 'api'"));
    assert!(client.value("api", ServiceKey::Scale).await.is_none());
}

#[tokio::test]
async fn test_color_prints_default() {
    let client = MockConsulClient::new();

    let output = run(
        Commands::Color {
            service: "api".to_string(),
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(output, "green\n");
}

#[tokio::test]
async fn test_next_color_write_flips_stored_color() {
    let client = MockConsulClient::new()
        .with_value("api", ServiceKey::Color, "green")
        .await;

    let output = run(
        Commands::NextColor {
            service: "api".to_string(),
            write: true,
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(output, "blue\n");
    assert_eq!(client.value("api", ServiceKey::Color).await.as_deref(), Some("blue"));
}

#[tokio::test]
async fn test_next_color_for_new_service_is_blue() {
    let client = MockConsulClient::new();

    let output = run(
        Commands::NextColor {
            service: "api".to_string(),
            write: false,
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(output, "blue\n");
    assert!(client.value("api", ServiceKey::Color).await.is_none());
}

#[tokio::test]
async fn test_put_commands_print_store_response() {
    let client = MockConsulClient::new().with_put_response("true\n");

    let scale = run(
        Commands::PutScale {
            service: "api".to_string(),
            value: 3,
        },
        &client,
    )
    .await
    .unwrap();
    let color = run(
        Commands::PutColor {
            service: "api".to_string(),
            value: "orange".to_string(),
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(scale, "true\n");
    assert_eq!(color, "true\n");
    assert_eq!(client.value("api", ServiceKey::Scale).await.as_deref(), Some("3"));
    assert_eq!(client.value("api", ServiceKey::Color).await.as_deref(), Some("orange"));
}

#[tokio::test]
async fn test_unreachable_store_fails_command() {
    let client = MockConsulClient::new().unreachable();

    let result = run(
        Commands::Color {
            service: "api".to_string(),
        },
        &client,
    )
    .await;

    assert!(result.is_err());
}
