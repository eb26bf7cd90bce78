//! Runtime models shared across the web layer.

pub mod auth;
pub mod config;
