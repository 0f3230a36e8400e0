use crate::config::HubConfig;
use crate::hub::hub_command::HubCommand;
use crate::hub::relay::{broadcast_viewer_count, relay};
use crate::registry::{Classification, ConnectionRegistry};
use crate::signaling::validate;
use axum::extract::ws::Utf8Bytes;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use vigil_core::{ChannelId, Role};

/// Snapshot of the registry, served on the status endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubStats {
    pub channels: usize,
    pub cameras: usize,
    pub viewers: usize,
}

/// Single owner of the connection registry and role table.
///
/// Every registry mutation and every relay happens inside [`Hub::run`], one
/// command at a time.
pub struct Hub {
    registry: ConnectionRegistry,
    command_rx: mpsc::Receiver<HubCommand>,
    config: HubConfig,
}

impl Hub {
    pub fn new(config: HubConfig, command_rx: mpsc::Receiver<HubCommand>) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            command_rx,
            config,
        }
    }

    pub async fn run(mut self) {
        info!(
            "Hub event loop started (viewer count {})",
            if self.config.viewer_count { "on" } else { "off" }
        );

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        info!("Hub event loop finished");
    }

    fn handle_command(&mut self, cmd: HubCommand) {
        match cmd {
            HubCommand::Register { channel_id, handle } => {
                self.registry.register(channel_id, handle);
                info!(
                    "Channel {} registered ({} open)",
                    channel_id,
                    self.registry.len()
                );
            }

            HubCommand::Inbound {
                channel_id,
                payload,
            } => self.handle_inbound(channel_id, payload),

            HubCommand::Unregister { channel_id } => {
                if !self.registry.unregister(&channel_id) {
                    debug!("Channel {} already unregistered", channel_id.short());
                    return;
                }
                info!(
                    "Channel {} unregistered ({} open)",
                    channel_id,
                    self.registry.len()
                );
                self.push_viewer_count();
            }

            HubCommand::Stats { reply } => {
                let _ = reply.send(self.stats());
            }
        }
    }

    fn handle_inbound(&mut self, channel_id: ChannelId, payload: Utf8Bytes) {
        if !self.registry.contains(&channel_id) {
            debug!("Dropping message from closed channel {}", channel_id.short());
            return;
        }

        let accepted = match validate(payload) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Dropping message from {}: {}", channel_id.short(), e);
                return;
            }
        };

        if let Some(role) = accepted.classifies {
            self.classify(&channel_id, role);
        }

        let report = relay(&self.registry, &channel_id, &accepted.payload);
        debug!(
            "Relayed {} from {}: {:?}",
            accepted.message.kind(),
            channel_id.short(),
            report
        );

        self.push_viewer_count();
    }

    fn classify(&mut self, channel_id: &ChannelId, role: Role) {
        match self.registry.classify(channel_id, role) {
            Classification::Assigned => info!("Channel {} is a {}", channel_id, role),
            Classification::Conflict { existing } => warn!(
                "Channel {} is a {}, keeping that role despite a {} message",
                channel_id.short(),
                existing,
                role
            ),
            Classification::Unchanged | Classification::Unregistered => {}
        }
    }

    fn push_viewer_count(&self) {
        if !self.config.viewer_count {
            return;
        }
        let count = broadcast_viewer_count(&self.registry);
        debug!("Viewer count is {}", count);
    }

    fn stats(&self) -> HubStats {
        HubStats {
            channels: self.registry.len(),
            cameras: self.registry.count_role(Role::Camera),
            viewers: self.registry.count_role(Role::Viewer),
        }
    }
}
