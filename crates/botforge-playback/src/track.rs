//! The playable item type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One playable audio item.
///
/// Immutable once enqueued: the title is what users see in queue
/// listings, the source reference is whatever the transport needs to
/// actually stream it (a URL, a resolver-specific id). The core never
/// interprets `source_ref`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub source_ref: String,
}

impl Track {
    pub fn new(title: impl Into<String>, source_ref: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source_ref: source_ref.into(),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
