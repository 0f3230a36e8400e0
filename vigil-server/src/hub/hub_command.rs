use crate::hub::HubStats;
use crate::registry::ChannelHandle;
use axum::extract::ws::Utf8Bytes;
use tokio::sync::oneshot;
use vigil_core::ChannelId;

/// Commands sent to the hub by connection tasks.
#[derive(Debug)]
pub enum HubCommand {
    /// A transport upgrade completed; start tracking the channel.
    Register {
        channel_id: ChannelId,
        handle: ChannelHandle,
    },

    /// A text frame arrived on a channel.
    Inbound {
        channel_id: ChannelId,
        payload: Utf8Bytes,
    },

    /// The transport closed (normally or after an error).
    Unregister { channel_id: ChannelId },

    Stats { reply: oneshot::Sender<HubStats> },
}
