use crate::debounce::Debouncer;
use catalog::engine::{BucketView, PageView};
use catalog::format::{format_count, format_duration, format_upload_date};
use catalog::model::VideoRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Quiet period between keystrokes before the filter re-runs.
const QUERY_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct ChannelInputProps {
    pub loading: bool,
    pub on_submit: Callback<String>,
}

#[function_component(ChannelInput)]
pub fn channel_input(props: &ChannelInputProps) -> Html {
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    // Enter submits the form; the default page reload is suppressed.
    let on_submit = {
        let on_submit = props.on_submit.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Enter a channel name, e.g. @chaiaurcode..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Loading..." } else { "Load" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_query_change: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let debouncer = use_mut_ref(|| Debouncer::new(QUERY_DEBOUNCE_MS));

    let on_input = {
        let on_query_change = props.on_query_change.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let on_query_change = on_query_change.clone();
            debouncer
                .borrow_mut()
                .schedule(move || on_query_change.emit(value));
        })
    };

    html! {
        <input
            type="text"
            class="flex-grow p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
            placeholder="Filter by title..."
            oninput={on_input}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub total: usize,
    pub filtered: usize,
    pub minutes: u64,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    html! {
        <div class="flex justify-center gap-6 text-sm text-gray-600 mb-4">
            <p>{"Total: "}<span id="totalCount">{props.total}</span></p>
            <p>{"Shown: "}<span id="filteredCount">{props.filtered}</span></p>
            <p>{"Duration: "}<span id="totalDuration">{props.minutes}</span>{" min"}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BucketSectionProps {
    pub bucket_view: BucketView,
}

#[function_component(BucketSection)]
pub fn bucket_section(props: &BucketSectionProps) -> Html {
    let bucket_view = &props.bucket_view;
    let bucket = bucket_view.bucket;

    html! {
        <section id={format!("bucket-{}", bucket.key())} class="mb-6">
            <h2 class="text-lg font-semibold text-gray-800 bg-gray-200 rounded p-2 mb-2">
                { bucket.label() }
                { format!(" ({})", bucket_view.video_count()) }
            </h2>
            {
                if bucket_view.pages.is_empty() {
                    html! {
                        <p class="text-sm text-gray-500 px-2">{"No videos in this range."}</p>
                    }
                } else {
                    html! {
                        { for bucket_view.pages.iter().map(|page| html! {
                            <VideoPage page={page.clone()} />
                        })}
                    }
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPageProps {
    pub page: PageView,
}

#[function_component(VideoPage)]
pub fn video_page(props: &VideoPageProps) -> Html {
    let page = &props.page;

    html! {
        <div class="bucket-page mb-4">
            <h3 class="text-sm font-medium text-gray-500 px-2 mb-1">
                { format!("Page {}", page.index + 1) }
            </h3>
            <div class="divide-y divide-gray-200">
                { for page.videos.iter().enumerate().map(|(offset, video)| html! {
                    <VideoRow
                        video={video.clone()}
                        display_index={page.start + offset + 1}
                    />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoRowProps {
    pub video: VideoRecord,
    /// 1-based running index within the bucket.
    pub display_index: usize,
}

#[function_component(VideoRow)]
pub fn video_row(props: &VideoRowProps) -> Html {
    let video = &props.video;

    html! {
        <div class="p-3 bg-white flex gap-3 items-start">
            <span class="text-gray-400 text-sm w-10 text-right">
                { format!("{}.", props.display_index) }
            </span>
            <a href={video.watch_url()} target="_blank">
                <img
                    class="w-24 rounded"
                    src={video.thumbnail_url()}
                    alt={video.title.clone()}
                />
            </a>
            <div>
                <a href={video.watch_url()}
                   target="_blank"
                   class="text-blue-600 hover:underline font-medium">
                    { &video.title }
                </a>
                <p class="text-sm text-gray-500 flex flex-wrap gap-3 mt-1">
                    <span>{"📅 "}{ format_upload_date(&video.upload_date) }</span>
                    <span>{"⏳ "}{ format_duration(video.duration_seconds) }</span>
                    <span>{"👁️ "}{ format_count(video.views) }</span>
                    <span>{"👍 "}{ format_count(video.likes) }</span>
                    <span>{"💬 "}{ format_count(video.comment_count) }</span>
                </p>
            </div>
        </div>
    }
}
