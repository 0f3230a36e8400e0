use crate::config::HubConfig;
use crate::error::HubError;
use crate::hub::{Hub, HubCommand, HubStats};
use crate::registry::ChannelHandle;
use axum::extract::ws::Utf8Bytes;
use tokio::sync::{mpsc, oneshot};
use vigil_core::ChannelId;

/// Cloneable entry point to the hub task.
#[derive(Clone)]
pub struct HubHandle {
    command_tx: mpsc::Sender<HubCommand>,
}

impl HubHandle {
    /// Spawn a hub on the current runtime and return a handle to it.
    ///
    /// The hub stops once every handle has been dropped.
    pub fn spawn(config: HubConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
        let hub = Hub::new(config, command_rx);
        tokio::spawn(hub.run());

        Self { command_tx }
    }

    pub async fn register(&self, channel_id: ChannelId, handle: ChannelHandle) -> Result<(), HubError> {
        self.send(HubCommand::Register { channel_id, handle }).await
    }

    pub async fn dispatch(&self, channel_id: ChannelId, payload: Utf8Bytes) -> Result<(), HubError> {
        self.send(HubCommand::Inbound {
            channel_id,
            payload,
        })
        .await
    }

    pub async fn unregister(&self, channel_id: ChannelId) -> Result<(), HubError> {
        self.send(HubCommand::Unregister { channel_id }).await
    }

    /// Also serves as a barrier: the reply comes back only after every
    /// command queued before it has been handled.
    pub async fn stats(&self) -> Result<HubStats, HubError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::Stats { reply }).await?;
        rx.await.map_err(|_| HubError::NoReply)
    }

    async fn send(&self, cmd: HubCommand) -> Result<(), HubError> {
        self.command_tx.send(cmd).await.map_err(|_| HubError::Closed)
    }
}
