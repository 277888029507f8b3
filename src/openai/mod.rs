pub mod client;
pub mod credential;

pub use client::{AssistantApi, AssistantsClient};
pub use credential::Credential;
