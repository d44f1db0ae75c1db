use super::*;

#[tokio::test]
async fn test_networking_manager_creation() {
    let manager = NetworkingManager::new(NetworkingConfig::default());

    assert!(manager.is_ok(), "Should create networking manager");
    assert!(!manager.unwrap().trace_requests());
}

#[test]
fn test_zero_timeout_rejected() {
    let config = NetworkingConfig {
        timeout_seconds: 0,
        ..Default::default()
    };

    let result = NetworkingManager::new(config);
    assert!(matches!(
        result,
        Err(NetworkingError::InvalidTimeout { seconds: 0 })
    ));
}
