use thiserror::Error;
use vigil_core::ChannelId;

/// Why an inbound signaling payload was dropped.
#[derive(Debug, Error)]
pub enum RejectReason {
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("message has no `type` field")]
    MissingType,

    #[error("offer message without an `offer` field")]
    MissingOffer,

    #[error("answer message without an `answer` field")]
    MissingAnswer,
}

/// The hub task is no longer running.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("hub command channel closed")]
    Closed,

    #[error("hub dropped the reply")]
    NoReply,
}

/// Delivery to one recipient failed. Never aborts a relay loop.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("channel {0} is no longer open")]
    ChannelClosed(ChannelId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a shared secret is required (set VIGIL_SECRET or pass --secret)")]
    MissingSecret,

    #[error("websocket path must start with '/' and not clash with another route, got {0:?}")]
    InvalidWsPath(String),
}
