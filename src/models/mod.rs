//! Upstream listing records and how they map into attachments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::payload::{Action, ActionStyle, Attachment, Field, Footer};
use crate::traits::ToFields;

/// Footer text stamped on every listing attachment.
pub const LISTING_FOOTER: &str = "Listing feed";

/// A marketplace listing handed over by a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub discovered_at: DateTime<Utc>,
}

impl ToFields for Listing {
    fn to_fields(&self) -> Vec<Field> {
        vec![Field::short("Price", &self.price), Field::short("ID", &self.id)]
    }
}

impl Listing {
    /// Builds the attachment announcing this listing: linked title, price and
    /// id fields, a primary "View listing" button, the image as thumbnail and
    /// a footer stamped with the discovery time.
    ///
    /// # Returns
    /// * `Result<Attachment, ValidationError>` - Fails when the listing URL or
    ///   image URL is not absolute
    pub fn to_attachment(&self) -> Result<Attachment, ValidationError> {
        let view = Action::button("View listing", &self.url)?.with_style(ActionStyle::Primary);
        let footer = Footer::new(LISTING_FOOTER)?.with_timestamp(self.discovered_at);

        let mut builder = Attachment::builder()
            .color("good")
            .title(&self.title)
            .title_link(&self.url)
            .fields_from(self)
            .action(view)
            .footer(footer);

        if let Some(image_url) = &self.image_url {
            builder = builder.thumb_url(image_url);
        }

        builder.build()
    }
}
