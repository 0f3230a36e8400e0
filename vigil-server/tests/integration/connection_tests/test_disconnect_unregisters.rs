use crate::integration::init_tracing;
use crate::utils::{TEST_TOKEN, TestClient, spawn_server, test_config, viewer_count, wait_for_stats};

#[tokio::test]
async fn test_viewer_disconnect_updates_camera() {
    init_tracing();

    let (addr, state) = spawn_server(test_config()).await.expect("Server failed to start");

    let mut camera = TestClient::connect(addr, Some(TEST_TOKEN)).await.unwrap();
    let mut viewer = TestClient::connect(addr, Some(TEST_TOKEN)).await.unwrap();
    wait_for_stats(&state, 5000, |s| s.channels == 2).await.unwrap();

    camera.send_text(r#"{"type":"answer","answer":"Y"}"#).await.unwrap();
    assert_eq!(camera.recv_text().await.unwrap(), viewer_count(0));
    viewer.recv_text().await.unwrap();

    viewer.send_text(r#"{"type":"offer","offer":"X"}"#).await.unwrap();
    camera.recv_text().await.unwrap();
    assert_eq!(camera.recv_text().await.unwrap(), viewer_count(1));

    viewer.close().await.expect("Failed to close viewer");

    assert_eq!(camera.recv_text().await.unwrap(), viewer_count(0));

    let stats = wait_for_stats(&state, 5000, |s| s.channels == 1).await.unwrap();
    assert_eq!(stats.cameras, 1);
    assert_eq!(stats.viewers, 0);

    camera.close().await.unwrap();
}

#[tokio::test]
async fn test_dropped_connection_unregisters() {
    init_tracing();

    let (addr, state) = spawn_server(test_config()).await.expect("Server failed to start");

    let client = TestClient::connect(addr, Some(TEST_TOKEN)).await.unwrap();
    wait_for_stats(&state, 5000, |s| s.channels == 1).await.unwrap();

    // No close handshake, the socket just goes away.
    drop(client);

    wait_for_stats(&state, 5000, |s| s.channels == 0)
        .await
        .expect("Channel should be removed after the socket drops");
}
