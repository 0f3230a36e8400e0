pub use vigil_core::model::{ChannelId, Role};

pub mod model {
    pub use vigil_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use vigil_server::*;
}
