mod channel_handle;
mod connection_registry;

pub use channel_handle::*;
pub use connection_registry::*;
