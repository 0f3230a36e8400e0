mod validator;
mod ws_handler;

pub use validator::*;
pub use ws_handler::*;
