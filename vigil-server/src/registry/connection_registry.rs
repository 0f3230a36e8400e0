use crate::registry::ChannelHandle;
use std::collections::HashMap;
use tracing::warn;
use vigil_core::{ChannelId, Role};

/// Result of trying to assign a role to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// First classifying message; the role is now set.
    Assigned,
    /// The channel already had this role.
    Unchanged,
    /// The channel already has the other role and keeps it.
    Conflict { existing: Role },
    /// No such channel (already closed).
    Unregistered,
}

/// Live channels and their inferred roles.
///
/// Owned by the hub task only; nothing else holds a reference to it.
#[derive(Default)]
pub struct ConnectionRegistry {
    channels: HashMap<ChannelId, ChannelHandle>,
    roles: HashMap<ChannelId, Role>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, channel_id: ChannelId, handle: ChannelHandle) {
        if self.channels.contains_key(&channel_id) {
            warn!("Channel {} is already registered, ignoring", channel_id);
            return;
        }
        self.channels.insert(channel_id, handle);
    }

    /// Returns `true` when an entry was actually removed.
    pub fn unregister(&mut self, channel_id: &ChannelId) -> bool {
        self.roles.remove(channel_id);
        self.channels.remove(channel_id).is_some()
    }

    pub fn classify(&mut self, channel_id: &ChannelId, role: Role) -> Classification {
        if !self.channels.contains_key(channel_id) {
            return Classification::Unregistered;
        }

        match self.roles.get(channel_id) {
            None => {
                self.roles.insert(*channel_id, role);
                Classification::Assigned
            }
            Some(existing) if *existing == role => Classification::Unchanged,
            Some(existing) => Classification::Conflict {
                existing: *existing,
            },
        }
    }

    pub fn role_of(&self, channel_id: &ChannelId) -> Option<Role> {
        self.roles.get(channel_id).copied()
    }

    pub fn contains(&self, channel_id: &ChannelId) -> bool {
        self.channels.contains_key(channel_id)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.roles.values().filter(|r| **r == role).count()
    }

    pub fn for_each_other<F>(&self, exclude: &ChannelId, mut f: F)
    where
        F: FnMut(&ChannelId, &ChannelHandle),
    {
        self.channels
            .iter()
            .filter(|(id, _)| *id != exclude)
            .for_each(|(id, handle)| f(id, handle));
    }

    pub fn for_each_with_role<F>(&self, role: Role, mut f: F)
    where
        F: FnMut(&ChannelId, &ChannelHandle),
    {
        for (id, r) in &self.roles {
            if *r != role {
                continue;
            }
            if let Some(handle) = self.channels.get(id) {
                f(id, handle);
            }
        }
    }
}
