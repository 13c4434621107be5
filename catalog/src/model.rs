use serde::{Deserialize, Serialize};

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";
pub const THUMBNAIL_URL_TEMPLATE: &str = "https://img.youtube.com/vi/{}/mqdefault.jpg";

/// One fetched video record, matching the richest schema the channel
/// fetcher writes. Counts and duration are unsigned so a document with a
/// negative value fails deserialization instead of rendering nonsense;
/// fields the fetcher omits default to zero or empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoRecord {
    #[serde(rename = "channelID", default)]
    pub channel_id: String,
    #[serde(rename = "videoID")]
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
}

impl VideoRecord {
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL_PREFIX, self.video_id)
    }

    pub fn thumbnail_url(&self) -> String {
        THUMBNAIL_URL_TEMPLATE.replace("{}", &self.video_id)
    }
}

/// File name of a channel's video document, as written by the fetcher:
/// trimmed, lowercased, leading '@' stripped, percent-encoded.
pub fn channel_data_file(raw_channel: &str) -> String {
    let normalized = raw_channel.trim().to_lowercase();
    let normalized = normalized.strip_prefix('@').unwrap_or(&normalized);
    format!("{}_channel_videos.json", urlencoding::encode(normalized))
}
