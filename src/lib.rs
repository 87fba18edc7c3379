//! Builders for Slack incoming-webhook payloads.
//!
//! [`payload`] holds the pure value types and their JSON form. [`slack`]
//! posts a finished message; [`models`] maps listing records into
//! attachments and [`announcer`] ties the two together.

pub mod announcer;
pub mod error;
pub mod models;
pub mod payload;
pub mod slack;
pub mod traits;

pub use error::ValidationError;
pub use payload::{
    Action, ActionKind, ActionStyle, Attachment, AttachmentBuilder, Color, Field, Footer, Message,
    MessageBuilder, serialize,
};
