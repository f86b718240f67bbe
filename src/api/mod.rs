//! Lambda handler and request processing

pub mod chat;
pub mod handler;
pub mod helpers;
pub mod notify;
pub mod parsing;
pub mod verify;

// Re-export the main handler for convenience
pub use handler::handler;
