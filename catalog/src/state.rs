use crate::model::VideoRecord;

/// The loaded catalog: which channel the collection came from and the
/// records themselves. There is exactly one way to change it, replacing
/// it wholesale with `loaded`; a failed load constructs nothing, so the
/// previous state survives untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    channel: Option<String>,
    videos: Vec<VideoRecord>,
}

impl CatalogState {
    pub fn empty() -> CatalogState {
        CatalogState::default()
    }

    pub fn loaded(channel: impl Into<String>, videos: Vec<VideoRecord>) -> CatalogState {
        CatalogState {
            channel: Some(channel.into()),
            videos,
        }
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn total_count(&self) -> usize {
        self.videos.len()
    }

    pub fn has_loaded(&self) -> bool {
        self.channel.is_some()
    }
}
