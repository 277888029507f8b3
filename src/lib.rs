//! Assistant provisioner — registers a tool-enabled assistant with an
//! OpenAI-compatible API and keeps a local label → id registry.

pub mod config;
pub mod error;
pub mod instructions;
pub mod openai;
pub mod provision;
pub mod registry;
pub mod tools;
pub mod types;
