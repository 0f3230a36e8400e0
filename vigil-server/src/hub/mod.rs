mod hub;
mod hub_command;
mod hub_handle;
mod relay;

pub use hub::*;
pub use hub_command::*;
pub use hub_handle::*;
pub use relay::*;
