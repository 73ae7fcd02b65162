//! The `Video` record and the typed payloads that create or replace one.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::resolution::Resolution;
use crate::types::{Timestamp, VideoId};

/// Delay between creation and the default publication date.
pub const DEFAULT_PUBLICATION_DELAY_DAYS: i64 = 1;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored video, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    /// `null` on the wire when unrestricted.
    pub min_age_restriction: Option<u8>,
    #[serde(with = "crate::timestamp::millis")]
    pub created_at: Timestamp,
    #[serde(with = "crate::timestamp::millis")]
    pub publication_date: Timestamp,
    pub available_resolutions: Vec<Resolution>,
}

impl Video {
    /// Build a freshly created video.
    ///
    /// Downloads are disabled, there is no age restriction, and the
    /// publication date is one day after `created_at`.
    pub fn new(id: VideoId, input: CreateVideo, created_at: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at,
            publication_date: created_at + Duration::days(DEFAULT_PUBLICATION_DELAY_DAYS),
            available_resolutions: input.available_resolutions,
        }
    }

    /// Replace every mutable field. `id` and `created_at` are untouched.
    pub fn apply_update(&mut self, input: UpdateVideo) {
        self.title = input.title;
        self.author = input.author;
        self.can_be_downloaded = input.can_be_downloaded;
        self.min_age_restriction = input.min_age_restriction;
        self.publication_date = input.publication_date;
        self.available_resolutions = input.available_resolutions;
    }
}

// ---------------------------------------------------------------------------
// Validated payloads
// ---------------------------------------------------------------------------

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVideo {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// An update request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVideo {
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub publication_date: Timestamp,
    pub available_resolutions: Vec<Resolution>,
}
