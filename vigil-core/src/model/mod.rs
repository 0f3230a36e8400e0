mod channel;
mod role;
mod signaling;

pub use channel::ChannelId;
pub use role::Role;
pub use signaling::{ServerMessage, SignalMessage};
