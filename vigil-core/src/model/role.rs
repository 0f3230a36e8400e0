use serde::{Deserialize, Serialize};
use std::fmt;

/// Role inferred from the first classifying message a channel sends.
/// A channel that has not classified itself yet has no role at all.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Publishes the media; answers viewer offers.
    Camera,
    /// Subscribes to the media; initiates with an offer.
    Viewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Camera => f.write_str("camera"),
            Role::Viewer => f.write_str("viewer"),
        }
    }
}
