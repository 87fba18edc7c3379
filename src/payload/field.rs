use serde::Serialize;

/// A labeled value shown inside an attachment.
///
/// Short fields are rendered side by side by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    title: String,
    value: String,
    short: bool,
}

impl Field {
    /// Creates a field, converting `title` and `value` to text.
    pub fn new(title: impl ToString, value: impl ToString, short: bool) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            short,
        }
    }

    /// A field that may share a row with its neighbours.
    pub fn short(title: impl ToString, value: impl ToString) -> Self {
        Self::new(title, value, true)
    }

    /// A field that takes the whole row.
    pub fn long(title: impl ToString, value: impl ToString) -> Self {
        Self::new(title, value, false)
    }

    /// Label shown above the value.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_short(&self) -> bool {
        self.short
    }
}
