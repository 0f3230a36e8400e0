pub mod config;
pub mod error;
pub mod http;
pub mod hub;
pub mod registry;
pub mod signaling;

pub use config::*;
pub use error::*;
pub use http::{AppState, build_router, serve};
pub use hub::*;
pub use registry::*;
pub use signaling::*;
