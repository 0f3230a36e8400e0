use crate::model::role::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound signaling payload, decoded on its `type` tag.
///
/// Payload fields stay as raw JSON values: the relay checks that they are
/// present and never looks inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SignalMessage {
    Offer {
        #[serde(default)]
        offer: Option<Value>,
    },
    Answer {
        #[serde(default)]
        answer: Option<Value>,
    },
    IceCandidate {
        #[serde(default)]
        candidate: Option<Value>,
    },
    /// Any other `type`. Relayed without structural checks.
    #[serde(other)]
    Unknown,
}

impl SignalMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            SignalMessage::Offer { .. } => "offer",
            SignalMessage::Answer { .. } => "answer",
            SignalMessage::IceCandidate { .. } => "ice-candidate",
            SignalMessage::Unknown => "unknown",
        }
    }

    /// Role a sender takes on by sending this message, if any.
    pub fn classifies(&self) -> Option<Role> {
        match self {
            SignalMessage::Offer { .. } => Some(Role::Viewer),
            SignalMessage::Answer { .. } => Some(Role::Camera),
            _ => None,
        }
    }
}

/// Frames originated by the server itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    ViewerCount { count: usize },
}
