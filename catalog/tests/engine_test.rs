use catalog::engine::{
    build_view, DurationBucket, FilterParams, SortKey, PAGE_SIZE,
};
use catalog::model::VideoRecord;

fn vid(id: &str, title: &str, duration_seconds: u64) -> VideoRecord {
    VideoRecord {
        channel_id: "UCtest".to_string(),
        video_id: id.to_string(),
        title: title.to_string(),
        duration_seconds,
        upload_date: String::new(),
        comment_count: 0,
        likes: 0,
        views: 0,
    }
}

fn collect_ids(view: &catalog::engine::CatalogView) -> Vec<String> {
    view.buckets
        .iter()
        .flat_map(|b| b.pages.iter())
        .flat_map(|p| p.videos.iter())
        .map(|v| v.video_id.clone())
        .collect()
}

#[test]
fn every_duration_falls_in_exactly_one_bucket() {
    for seconds in [0, 1, 900, 901, 1800, 1801, 3600, 3601, 18000, 18001, 604800] {
        let matching = DurationBucket::ALL
            .iter()
            .filter(|b| b.contains(seconds))
            .count();
        assert_eq!(matching, 1, "duration {seconds}s");
    }
}

#[test]
fn bucket_boundaries_are_inclusive_on_the_upper_end() {
    assert_eq!(DurationBucket::for_duration(0), DurationBucket::Short);
    assert_eq!(DurationBucket::for_duration(900), DurationBucket::Short);
    assert_eq!(DurationBucket::for_duration(901), DurationBucket::Medium);
    assert_eq!(DurationBucket::for_duration(1800), DurationBucket::Medium);
    assert_eq!(DurationBucket::for_duration(1801), DurationBucket::Long);
    assert_eq!(DurationBucket::for_duration(3600), DurationBucket::Long);
    assert_eq!(DurationBucket::for_duration(3601), DurationBucket::Extended);
    assert_eq!(DurationBucket::for_duration(18000), DurationBucket::Extended);
    assert_eq!(DurationBucket::for_duration(18001), DurationBucket::Marathon);
}

#[test]
fn view_holds_every_video_exactly_once() {
    let videos = vec![
        vid("a", "intro", 120),
        vid("b", "deep dive", 1500),
        vid("c", "workshop", 2400),
        vid("d", "conference talk", 7000),
        vid("e", "livestream", 30000),
        vid("f", "zero duration fallback", 0),
    ];
    let view = build_view(&videos, &FilterParams::default());

    let mut ids = collect_ids(&view);
    ids.sort();
    assert_eq!(ids, ["a", "b", "c", "d", "e", "f"]);
    assert_eq!(view.filtered_count, 6);
}

#[test]
fn one_character_query_does_not_filter() {
    let videos = vec![vid("a", "alpha", 60), vid("b", "beta", 60)];
    let params = FilterParams {
        query: "a".to_string(),
        ..FilterParams::default()
    };
    assert_eq!(build_view(&videos, &params).filtered_count, 2);
}

#[test]
fn query_matches_title_substring_case_insensitively() {
    let videos = vec![
        vid("a", "Learning Rust 101", 60),
        vid("b", "cooking stream", 60),
        vid("c", "RUST in production", 60),
    ];
    let params = FilterParams {
        query: "rust".to_string(),
        ..FilterParams::default()
    };
    let view = build_view(&videos, &params);
    let mut ids = collect_ids(&view);
    ids.sort();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn query_is_trimmed_before_the_length_check() {
    let videos = vec![vid("a", "alpha", 60), vid("b", "beta", 60)];
    let params = FilterParams {
        query: "  al  ".to_string(),
        ..FilterParams::default()
    };
    assert_eq!(collect_ids(&build_view(&videos, &params)), ["a"]);
}

#[test]
fn sort_by_comments_descending() {
    let mut a = vid("a", "five", 60);
    a.comment_count = 5;
    let mut b = vid("b", "twenty", 60);
    b.comment_count = 20;
    let mut c = vid("c", "one", 60);
    c.comment_count = 1;

    let params = FilterParams {
        sort: SortKey::Comments,
        ..FilterParams::default()
    };
    let view = build_view(&[a, b, c], &params);
    assert_eq!(collect_ids(&view), ["b", "a", "c"]);
}

#[test]
fn sort_by_views_descending() {
    let mut a = vid("a", "a", 60);
    a.views = 10;
    let mut b = vid("b", "b", 60);
    b.views = 9000;

    let params = FilterParams {
        sort: SortKey::Views,
        ..FilterParams::default()
    };
    assert_eq!(collect_ids(&build_view(&[a, b], &params)), ["b", "a"]);
}

#[test]
fn default_sort_is_upload_date_descending() {
    let mut a = vid("a", "old", 60);
    a.upload_date = "2023-05-01T00:00:00Z".to_string();
    let mut b = vid("b", "new", 60);
    b.upload_date = "2025-06-01T00:00:00Z".to_string();
    let mut c = vid("c", "middle", 60);
    c.upload_date = "2024-01-15T00:00:00Z".to_string();

    let view = build_view(&[a, b, c], &FilterParams::default());
    assert_eq!(collect_ids(&view), ["b", "c", "a"]);
}

#[test]
fn unparseable_dates_sink_to_the_bottom() {
    let mut a = vid("a", "broken date", 60);
    a.upload_date = "???".to_string();
    let mut b = vid("b", "dated", 60);
    b.upload_date = "2024-01-01T00:00:00Z".to_string();

    let view = build_view(&[a, b], &FilterParams::default());
    assert_eq!(collect_ids(&view), ["b", "a"]);
}

#[test]
fn equal_sort_keys_keep_input_order() {
    let mut a = vid("a", "first", 60);
    a.comment_count = 7;
    let mut b = vid("b", "second", 60);
    b.comment_count = 7;

    let params = FilterParams {
        sort: SortKey::Comments,
        ..FilterParams::default()
    };
    assert_eq!(collect_ids(&build_view(&[a, b], &params)), ["a", "b"]);
}

#[test]
fn buckets_page_in_chunks_of_fifty() {
    let mut videos = Vec::new();
    for i in 0..120 {
        let mut v = vid(&format!("v{i:03}"), &format!("video {i}"), 60);
        // Distinct comment counts force a deterministic order.
        v.comment_count = 1000 - i;
        videos.push(v);
    }
    let params = FilterParams {
        sort: SortKey::Comments,
        ..FilterParams::default()
    };
    let view = build_view(&videos, &params);

    let short = view
        .buckets
        .iter()
        .find(|b| b.bucket == DurationBucket::Short)
        .unwrap();
    assert_eq!(short.pages.len(), 3);
    assert_eq!(short.pages[0].videos.len(), PAGE_SIZE);
    assert_eq!(short.pages[1].videos.len(), PAGE_SIZE);
    assert_eq!(short.pages[2].videos.len(), 20);
    for (i, page) in short.pages.iter().enumerate() {
        assert_eq!(page.index, i);
        assert_eq!(page.start, i * PAGE_SIZE);
    }

    // Concatenating the pages reproduces the sorted bucket.
    let paged: Vec<String> = short
        .pages
        .iter()
        .flat_map(|p| p.videos.iter())
        .map(|v| v.video_id.clone())
        .collect();
    let expected: Vec<String> = (0..120).map(|i| format!("v{i:03}")).collect();
    assert_eq!(paged, expected);
}

#[test]
fn empty_buckets_have_zero_pages() {
    let videos = vec![vid("a", "short one", 120)];
    let view = build_view(&videos, &FilterParams::default());
    let marathon = view
        .buckets
        .iter()
        .find(|b| b.bucket == DurationBucket::Marathon)
        .unwrap();
    assert!(marathon.pages.is_empty());
}

#[test]
fn view_reports_filtered_count_and_cumulative_minutes() {
    let videos = vec![
        vid("a", "match this", 60),
        vid("b", "match that", 90),
        vid("c", "other", 3600),
    ];
    let params = FilterParams {
        query: "match".to_string(),
        ..FilterParams::default()
    };
    let view = build_view(&videos, &params);
    assert_eq!(view.filtered_count, 2);
    // 150 seconds, rounded to whole minutes.
    assert_eq!(view.total_minutes, 3);
}
