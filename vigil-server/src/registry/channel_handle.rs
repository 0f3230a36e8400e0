use crate::error::RelayError;
use axum::extract::ws::Message;
use tokio::sync::mpsc;
use vigil_core::ChannelId;

/// Sending side of one connection's outbound queue.
///
/// The queue is drained by the connection's writer task. Once that task is
/// gone the handle reports itself closed and sends fail fast.
#[derive(Debug, Clone)]
pub struct ChannelHandle {
    channel_id: ChannelId,
    tx: mpsc::UnboundedSender<Message>,
}

impl ChannelHandle {
    pub fn new(channel_id: ChannelId, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { channel_id, tx }
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Queue a frame without waiting for the socket.
    pub fn send(&self, msg: Message) -> Result<(), RelayError> {
        self.tx
            .send(msg)
            .map_err(|_| RelayError::ChannelClosed(self.channel_id))
    }
}
