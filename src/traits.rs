//! Seams between the payload builders and the code around them

use anyhow::Result;
use async_trait::async_trait;

use crate::payload::{Field, Message};

/// Maps an upstream record into attachment fields.
///
/// The builders never read records by name; each record type decides which
/// of its attributes become fields and in which order. The returned order is
/// the order the client displays.
///
/// Plain closures work too: [`AttachmentBuilder::fields`] takes any iterator
/// of fields, so `builder.fields(map(&record))` needs no impl.
///
/// [`AttachmentBuilder::fields`]: crate::payload::AttachmentBuilder::fields
pub trait ToFields {
    /// Maps this record to fields
    ///
    /// # Returns
    /// * `Vec<Field>` - Fields in display order
    fn to_fields(&self) -> Vec<Field>;
}

/// Delivers a finished message somewhere.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message`.
    ///
    /// # Arguments
    /// * `message` - The finished payload to deliver
    ///
    /// # Returns
    /// * `Result<()>` - `Ok` when the message was accepted or delivery is disabled
    async fn notify(&self, message: &Message) -> Result<()>;
}
