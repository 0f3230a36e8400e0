use axum::extract::ws::{Message, Utf8Bytes};
use tokio::sync::mpsc;
use vigil_core::ChannelId;
use vigil_server::{ChannelHandle, HubHandle};

/// A registered channel without a socket behind it.
///
/// Frames the hub sends are queued in `rx` and read back with
/// [`MockChannel::received`].
pub struct MockChannel {
    pub id: ChannelId,
    rx: mpsc::UnboundedReceiver<Message>,
}

impl MockChannel {
    /// Create a channel and register it with the hub.
    pub async fn connect(hub: &HubHandle) -> Self {
        let id = ChannelId::new();
        let (tx, rx) = mpsc::unbounded_channel();

        hub.register(id, ChannelHandle::new(id, tx))
            .await
            .expect("hub should accept registration");

        Self { id, rx }
    }

    /// Send a text frame as if it came from this channel's socket.
    pub async fn send(&self, hub: &HubHandle, text: &str) {
        hub.dispatch(self.id, Utf8Bytes::from(text.to_owned()))
            .await
            .expect("hub should accept message");
    }

    /// Drain every text frame received so far.
    pub fn received(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            if let Message::Text(text) = msg {
                out.push(text.as_str().to_owned());
            }
        }
        out
    }

    /// Drop the receiving side, which is what a dead writer task looks like.
    pub fn hang_up(self) -> ChannelId {
        self.id
    }
}

/// Wait until the hub has handled everything queued so far.
pub async fn settle(hub: &HubHandle) {
    hub.stats().await.expect("hub should answer");
}

pub fn viewer_count(count: usize) -> String {
    format!(r#"{{"type":"viewer-count","count":{}}}"#, count)
}
