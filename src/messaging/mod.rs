//! Telegram notification delivery and order message formatting

pub mod client;
pub mod format;

// Re-export main types for convenience
pub use client::{Messenger, TelegramClient};
pub use format::format_order_message;
