//! Core types and helpers for snipbin
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod env_config;
mod slug;
mod thread;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use slug::{generate_slug, is_valid_slug};
pub use thread::*;
