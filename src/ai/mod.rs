//! Completion provider integration

pub mod client;

// Re-export main types for convenience
pub use client::{AnthropicClient, Completions, DEFAULT_MODEL};
