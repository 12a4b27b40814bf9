//! # rwa_core
//!
//! Core domain logic for RWA case search.

pub mod fallback;
pub mod fixtures;
pub mod health;
pub mod intent;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod search;
