mod health;
mod mcp;

pub use health::health;
pub use mcp::{dispatch, handle_message, mcp_request};
