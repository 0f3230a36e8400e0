use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{MockChannel, settle};

#[tokio::test]
async fn test_ice_candidates_relayed() {
    init_tracing();

    let hub = create_test_hub();

    let sender = MockChannel::connect(&hub).await;
    let mut peer = MockChannel::connect(&hub).await;

    let candidates = [
        r#"{"type":"ice-candidate","candidate":{"candidate":"candidate:1 1 udp 2122260223 10.0.0.2 54400 typ host","sdpMid":"0","sdpMLineIndex":0}}"#,
        r#"{"type":"ice-candidate"}"#,
        r#"{"type":"ice-candidate","candidate":""}"#,
        r#"{"type":"ice-candidate","candidate":null}"#,
    ];
    for text in candidates {
        sender.send(&hub, text).await;
    }
    settle(&hub).await;

    assert_eq!(peer.received(), candidates.map(str::to_owned).to_vec());

    let stats = hub.stats().await.unwrap();
    assert_eq!(stats.viewers + stats.cameras, 0, "ICE candidates do not classify");
}

#[tokio::test]
async fn test_unknown_types_relayed() {
    init_tracing();

    let hub = create_test_hub();

    let sender = MockChannel::connect(&hub).await;
    let mut peer = MockChannel::connect(&hub).await;

    let hangup = r#"{"type":"hangup"}"#;
    sender.send(&hub, hangup).await;
    settle(&hub).await;

    assert_eq!(peer.received(), vec![hangup.to_owned()]);
}
