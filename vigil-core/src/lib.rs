pub mod model;

pub use model::{ChannelId, Role, ServerMessage, SignalMessage};
