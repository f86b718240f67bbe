//! Configuration and request/response payload types

pub mod config;
pub mod models;
