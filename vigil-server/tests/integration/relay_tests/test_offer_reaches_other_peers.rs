use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{MockChannel, settle};

#[tokio::test]
async fn test_offer_reaches_other_peers() {
    init_tracing();

    let hub = create_test_hub();

    let mut sender = MockChannel::connect(&hub).await;
    let mut peers = Vec::new();
    for _ in 0..3 {
        peers.push(MockChannel::connect(&hub).await);
    }

    let offer = r#"{"type":"offer","offer":{"type":"offer","sdp":"v=0\r\no=- 1 2 IN IP4 127.0.0.1"}}"#;
    sender.send(&hub, offer).await;
    settle(&hub).await;

    for peer in &mut peers {
        assert_eq!(
            peer.received(),
            vec![offer.to_owned()],
            "Every other channel should get the exact payload once"
        );
    }
    assert!(
        sender.received().is_empty(),
        "Sender must not get its own message back"
    );
}

#[tokio::test]
async fn test_answer_reaches_other_peers() {
    init_tracing();

    let hub = create_test_hub();

    let mut camera = MockChannel::connect(&hub).await;
    let mut viewer = MockChannel::connect(&hub).await;

    let answer = r#"{"type":"answer","answer":"Y"}"#;
    camera.send(&hub, answer).await;
    settle(&hub).await;

    assert_eq!(viewer.received(), vec![answer.to_owned()]);

    // The camera itself only gets the count push, never the echo.
    let camera_frames = camera.received();
    assert!(!camera_frames.iter().any(|f| f == answer));
}

#[tokio::test]
async fn test_lone_channel_relays_to_nobody() {
    init_tracing();

    let hub = create_test_hub();
    let mut only = MockChannel::connect(&hub).await;

    only.send(&hub, r#"{"type":"offer","offer":"X"}"#).await;
    settle(&hub).await;

    assert!(only.received().is_empty());
}

#[tokio::test]
async fn test_closed_recipient_does_not_block_others() {
    init_tracing();

    let hub = create_test_hub();

    let sender = MockChannel::connect(&hub).await;
    let gone = MockChannel::connect(&hub).await;
    let mut alive = MockChannel::connect(&hub).await;

    // Writer task gone, close not yet processed by the hub.
    gone.hang_up();

    let offer = r#"{"type":"offer","offer":"X"}"#;
    sender.send(&hub, offer).await;
    settle(&hub).await;

    assert_eq!(alive.received(), vec![offer.to_owned()]);
}
