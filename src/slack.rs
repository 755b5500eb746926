//! Supports posting a plaintext message to a Slack channel.
//!
//! See [message::OutboundMessage].

pub mod api;
pub mod auth;
pub mod channel;
pub mod error;
pub mod message;
