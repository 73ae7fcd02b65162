//! In-memory store for video records.
//!
//! [`VideoStore`] is the single authority over the catalogue. It owns an
//! ordered `Vec<Video>` behind a `tokio::sync::RwLock`; every operation takes
//! the lock once, so lookup-then-mutate sequences (update, delete) are atomic
//! with respect to other requests.

use tokio::sync::RwLock;
use videohub_core::resolution::Resolution;
use videohub_core::timestamp;
use videohub_core::types::{Timestamp, VideoId};
use videohub_core::video::{CreateVideo, UpdateVideo, Video};

/// Id of the sample record loaded by [`VideoStore::seeded`].
pub const SAMPLE_VIDEO_ID: VideoId = 1;

/// Epoch milliseconds of `2023-12-04T21:42:23.091Z`.
const SAMPLE_VIDEO_CREATED_MS: i64 = 1_701_726_143_091;

struct Catalogue {
    videos: Vec<Video>,
    /// Highest id ever issued or loaded; survives `clear`.
    last_id: VideoId,
}

impl Catalogue {
    /// Ids follow the wall clock in milliseconds, but are bumped past the
    /// last issued id when the clock has not moved on.
    fn issue_id(&mut self, now: Timestamp) -> VideoId {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn position(&self, id: VideoId) -> Option<usize> {
        self.videos.iter().position(|v| v.id == id)
    }
}

/// Thread-safe in-memory video catalogue; wrap in `Arc` to share.
pub struct VideoStore {
    catalogue: RwLock<Catalogue>,
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_videos(Vec::new())
    }

    /// Create a store pre-loaded with `videos`, kept in the given order.
    ///
    /// Later ids are issued above the largest loaded id.
    pub fn with_videos(videos: Vec<Video>) -> Self {
        let last_id = videos.iter().map(|v| v.id).max().unwrap_or(0);
        Self {
            catalogue: RwLock::new(Catalogue { videos, last_id }),
        }
    }

    /// Create a store holding the single sample video (id `1`).
    pub fn seeded() -> Self {
        Self::with_videos(vec![sample_video()])
    }

    /// All videos in insertion order.
    pub async fn list(&self) -> Vec<Video> {
        self.catalogue.read().await.videos.clone()
    }

    pub async fn find_by_id(&self, id: VideoId) -> Option<Video> {
        let catalogue = self.catalogue.read().await;
        catalogue.videos.iter().find(|v| v.id == id).cloned()
    }

    /// Append a new video, assigning its id and timestamps.
    pub async fn create(&self, input: CreateVideo) -> Video {
        self.create_at(input, timestamp::now_millis()).await
    }

    /// As [`create`](Self::create), with an explicit creation time.
    pub async fn create_at(&self, input: CreateVideo, created_at: Timestamp) -> Video {
        let mut catalogue = self.catalogue.write().await;
        let id = catalogue.issue_id(created_at);
        let video = Video::new(id, input, created_at);
        catalogue.videos.push(video.clone());
        video
    }

    /// Replace the mutable fields of a video.
    ///
    /// Returns the updated video, or `None` if no video has this id.
    pub async fn update(&self, id: VideoId, input: UpdateVideo) -> Option<Video> {
        let mut catalogue = self.catalogue.write().await;
        let video = catalogue.videos.iter_mut().find(|v| v.id == id)?;
        video.apply_update(input);
        Some(video.clone())
    }

    /// Remove a video. Returns `true` if it existed.
    pub async fn delete(&self, id: VideoId) -> bool {
        let mut catalogue = self.catalogue.write().await;
        match catalogue.position(id) {
            Some(index) => {
                catalogue.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every video. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut catalogue = self.catalogue.write().await;
        let removed = catalogue.videos.len();
        catalogue.videos.clear();
        removed
    }

    pub async fn len(&self) -> usize {
        self.catalogue.read().await.videos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.catalogue.read().await.videos.is_empty()
    }
}

/// The record a freshly started service exposes when seeding is enabled.
pub fn sample_video() -> Video {
    let created_at =
        Timestamp::from_timestamp_millis(SAMPLE_VIDEO_CREATED_MS).unwrap_or_default();
    Video {
        id: SAMPLE_VIDEO_ID,
        title: "string".to_string(),
        author: "string".to_string(),
        can_be_downloaded: true,
        min_age_restriction: None,
        created_at,
        publication_date: created_at,
        available_resolutions: vec![Resolution::P144],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn create_input(title: &str) -> CreateVideo {
        CreateVideo {
            title: title.to_string(),
            author: "author".to_string(),
            available_resolutions: vec![Resolution::P480],
        }
    }

    fn update_input() -> UpdateVideo {
        UpdateVideo {
            title: "changed".to_string(),
            author: "someone".to_string(),
            can_be_downloaded: true,
            min_age_restriction: Some(12),
            publication_date: timestamp::parse("2025-01-01T00:00:00.000Z").unwrap(),
            available_resolutions: vec![Resolution::P2160],
        }
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = VideoStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn seeded_store_has_sample() {
        let store = VideoStore::seeded();
        let video = store.find_by_id(SAMPLE_VIDEO_ID).await.unwrap();
        assert_eq!(video.title, "string");
        assert_eq!(
            timestamp::format(&video.created_at),
            "2023-12-04T21:42:23.091Z"
        );
        assert_eq!(video.publication_date, video.created_at);
    }

    #[tokio::test]
    async fn create_appends_in_order() {
        let store = VideoStore::new();
        let first = store.create(create_input("first")).await;
        let second = store.create(create_input("second")).await;

        let titles: Vec<_> = store.list().await.into_iter().map(|v| v.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn same_millisecond_creates_get_distinct_ids() {
        let store = VideoStore::new();
        let now = timestamp::now_millis();
        let a = store.create_at(create_input("a"), now).await;
        let b = store.create_at(create_input("b"), now).await;

        assert_eq!(a.id, now.timestamp_millis());
        assert_eq!(b.id, a.id + 1);
    }

    #[tokio::test]
    async fn ids_stay_above_loaded_records() {
        let store = VideoStore::seeded();
        let early = Timestamp::from_timestamp_millis(0).unwrap();
        let video = store.create_at(create_input("x"), early).await;
        assert_eq!(video.id, SAMPLE_VIDEO_ID + 1);
    }

    #[tokio::test]
    async fn concurrent_creates_never_share_an_id() {
        let store = Arc::new(VideoStore::new());
        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(create_input(&i.to_string())).await.id })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(store.len().await, 64);
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place() {
        let store = VideoStore::new();
        let created = store.create(create_input("before")).await;

        let updated = store.update(created.id, update_input()).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "changed");
        assert_eq!(store.find_by_id(created.id).await, Some(updated));
    }

    #[tokio::test]
    async fn update_missing_id_leaves_store_unchanged() {
        let store = VideoStore::seeded();
        assert!(store.update(999_999, update_input()).await.is_none());
        assert_eq!(store.list().await, vec![sample_video()]);
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let store = VideoStore::seeded();
        let other = store.create(create_input("keep")).await;

        assert!(store.delete(SAMPLE_VIDEO_ID).await);
        assert!(!store.delete(SAMPLE_VIDEO_ID).await);
        assert_eq!(store.list().await, vec![other]);
    }

    #[tokio::test]
    async fn clear_empties_store_and_keeps_ids_distinct() {
        let store = VideoStore::new();
        let now = timestamp::now_millis();
        let before = store.create_at(create_input("a"), now).await;
        store.create_at(create_input("b"), now).await;

        assert_eq!(store.clear().await, 2);
        assert!(store.is_empty().await);

        let after = store.create_at(create_input("c"), now).await;
        assert!(after.id > before.id + 1);
    }
}
