//! The filter/sort/bucket/page pipeline. `build_view` is a pure function
//! of the loaded collection and the current filter parameters; callers
//! re-run it on every parameter change and render the result wholesale.

use std::cmp::Reverse;

use crate::model::VideoRecord;

pub const PAGE_SIZE: usize = 50;

/// Queries shorter than this are treated as "no filter", so single
/// keystrokes never narrow the list.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    UploadDate,
    Comments,
    Views,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterParams {
    pub query: String,
    pub sort: SortKey,
}

/// Fixed duration ranges, ascending and non-overlapping. The first range
/// is closed at zero so records whose duration failed to parse upstream
/// (stored as 0) still land in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
    Extended,
    Marathon,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 5] = [
        DurationBucket::Short,
        DurationBucket::Medium,
        DurationBucket::Long,
        DurationBucket::Extended,
        DurationBucket::Marathon,
    ];

    pub fn for_duration(seconds: u64) -> DurationBucket {
        if seconds <= 900 {
            DurationBucket::Short
        } else if seconds <= 1800 {
            DurationBucket::Medium
        } else if seconds <= 3600 {
            DurationBucket::Long
        } else if seconds <= 18000 {
            DurationBucket::Extended
        } else {
            DurationBucket::Marathon
        }
    }

    pub fn contains(&self, seconds: u64) -> bool {
        DurationBucket::for_duration(seconds) == *self
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Short => "Under 15 min",
            DurationBucket::Medium => "15 to 30 min",
            DurationBucket::Long => "30 to 60 min",
            DurationBucket::Extended => "1 to 5 hours",
            DurationBucket::Marathon => "Over 5 hours",
        }
    }

    /// Stable identifier used for the bucket's container element.
    pub fn key(&self) -> &'static str {
        match self {
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::Long => "long",
            DurationBucket::Extended => "extended",
            DurationBucket::Marathon => "marathon",
        }
    }
}

/// One ≤ PAGE_SIZE slice of a bucket's sorted videos. `start` is the
/// offset of the first row within the bucket, for 1-based numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub index: usize,
    pub start: usize,
    pub videos: Vec<VideoRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketView {
    pub bucket: DurationBucket,
    pub pages: Vec<PageView>,
}

impl BucketView {
    pub fn video_count(&self) -> usize {
        self.pages.iter().map(|p| p.videos.len()).sum()
    }
}

/// Complete engine output for one (collection, parameters) pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogView {
    pub buckets: Vec<BucketView>,
    pub filtered_count: usize,
    pub total_minutes: u64,
}

pub fn build_view(videos: &[VideoRecord], params: &FilterParams) -> CatalogView {
    let mut filtered = filter_videos(videos, &params.query);
    sort_videos(&mut filtered, params.sort);

    let filtered_count = filtered.len();
    let total_seconds: u64 = filtered.iter().map(|v| v.duration_seconds).sum();

    let buckets = DurationBucket::ALL
        .iter()
        .map(|&bucket| BucketView {
            bucket,
            pages: paginate(
                filtered
                    .iter()
                    .filter(|v| bucket.contains(v.duration_seconds))
                    .cloned()
                    .collect(),
            ),
        })
        .collect();

    CatalogView {
        buckets,
        filtered_count,
        total_minutes: (total_seconds + 30) / 60,
    }
}

fn filter_videos(videos: &[VideoRecord], query: &str) -> Vec<VideoRecord> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return videos.to_vec();
    }
    videos
        .iter()
        .filter(|v| v.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

fn sort_videos(videos: &mut [VideoRecord], sort: SortKey) {
    match sort {
        SortKey::UploadDate => {
            videos.sort_by_key(|v| Reverse(upload_timestamp(&v.upload_date)))
        }
        SortKey::Comments => videos.sort_by_key(|v| Reverse(v.comment_count)),
        SortKey::Views => videos.sort_by_key(|v| Reverse(v.views)),
    }
}

fn paginate(videos: Vec<VideoRecord>) -> Vec<PageView> {
    videos
        .chunks(PAGE_SIZE)
        .enumerate()
        .map(|(index, chunk)| PageView {
            index,
            start: index * PAGE_SIZE,
            videos: chunk.to_vec(),
        })
        .collect()
}

/// Unparseable dates sort as the epoch, sinking to the bottom under the
/// descending default.
fn upload_timestamp(date_str: &str) -> i64 {
    date_str
        .parse::<chrono::DateTime<chrono::Utc>>()
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}
