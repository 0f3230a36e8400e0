use crate::registry::ConnectionRegistry;
use axum::extract::ws::{Message, Utf8Bytes};
use tracing::{debug, error};
use vigil_core::{ChannelId, Role, ServerMessage};

/// Per-relay delivery tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelayReport {
    pub delivered: usize,
    /// Recipients whose transport was already going away.
    pub skipped: usize,
    pub failed: usize,
}

/// Forward `payload` unchanged to every open channel except `sender`.
///
/// A failed send is logged and the loop moves on to the next recipient.
pub fn relay(registry: &ConnectionRegistry, sender: &ChannelId, payload: &Utf8Bytes) -> RelayReport {
    let mut report = RelayReport::default();

    registry.for_each_other(sender, |_, handle| {
        if !handle.is_open() {
            debug!("Skipping {} (transport not open)", handle.channel_id().short());
            report.skipped += 1;
            return;
        }

        match handle.send(Message::Text(payload.clone())) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                error!("Relay to {} failed: {}", handle.channel_id().short(), e);
                report.failed += 1;
            }
        }
    });

    report
}

/// Push the current viewer count to every open camera channel.
///
/// Returns the count that was pushed.
pub fn broadcast_viewer_count(registry: &ConnectionRegistry) -> usize {
    let count = registry.count_role(Role::Viewer);

    let text = match serde_json::to_string(&ServerMessage::ViewerCount { count }) {
        Ok(json) => Utf8Bytes::from(json),
        Err(e) => {
            error!("Failed to serialize viewer count: {}", e);
            return count;
        }
    };

    registry.for_each_with_role(Role::Camera, |_, handle| {
        if !handle.is_open() {
            return;
        }
        if let Err(e) = handle.send(Message::Text(text.clone())) {
            error!("Viewer count to {} failed: {}", handle.channel_id().short(), e);
        }
    });

    count
}
