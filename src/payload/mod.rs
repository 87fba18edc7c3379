//! # Slack Webhook Payloads
//!
//! Value types for the incoming-webhook JSON body, built leaves first:
//!
//! - [`Field`], [`Footer`] and [`Action`] are the leaves
//! - [`Attachment`] owns fields, actions and at most one footer
//! - [`Message`] owns the attachments and the top-level overrides
//!
//! Every constructor that can reject input returns
//! [`ValidationError`](crate::error::ValidationError) on the spot. Built
//! values are immutable; the `with_*` and builder methods consume and return
//! a new value.
//!
//! ## Wire Format
//!
//! Unset options never reach the JSON, neither as `null` nor as an empty
//! string or array. The footer is written as the flat attachment keys
//! `footer`, `footer_icon` and `ts`.
//!
//! ```rust
//! use slack_payload::payload::{Attachment, Field, Message};
//!
//! let attachment = Attachment::builder()
//!     .color("good")
//!     .field(Field::new("Price", "$10", true))
//!     .build()?;
//!
//! let message = Message::builder("New listing").attachment(attachment).build()?;
//!
//! assert_eq!(
//!     message.to_json()?,
//!     r#"{"text":"New listing","attachments":[{"color":"good","fields":[{"title":"Price","value":"$10","short":true}]}]}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod attachment;
mod field;
mod footer;
mod message;
mod validate;

pub use action::{Action, ActionKind, ActionStyle};
pub use attachment::{Attachment, AttachmentBuilder, Color};
pub use field::Field;
pub use footer::{FOOTER_MAX_CHARS, Footer};
pub use message::{Message, MessageBuilder, serialize};
