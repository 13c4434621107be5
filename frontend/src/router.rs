use crate::browse::api::load_channel;
use crate::browse::components::{BucketSection, ChannelInput, SearchBar, StatsBar};
use crate::browse::filter_options::SortDropdown;
use crate::env_variable_utils::get_app_name;
use catalog::engine::{build_view, FilterParams, SortKey};
use catalog::state::CatalogState;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <BrowserApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the browser"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(BrowserApp)]
pub fn browser_app() -> Html {
    let catalog_state = use_state(CatalogState::empty);
    let applied_query = use_state(String::new);
    let sort_key = use_state(SortKey::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    // Channel submission: fetch, then replace the whole catalog state.
    // A load in flight is not cancelled by a second submission; the
    // last response to arrive wins.
    let on_channel_submit = {
        let catalog_state = catalog_state.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |channel: String| {
            if channel.trim().is_empty() {
                return;
            }
            loading.set(true);
            error_message.set(None);

            let catalog_state = catalog_state.clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_channel(channel, catalog_state, error_message, loading).await;
            });
        })
    };

    // Emitted by the search bar after its debounce window closes.
    let on_query_change = {
        let applied_query = applied_query.clone();
        Callback::from(move |query: String| {
            applied_query.set(query);
        })
    };

    // Sort changes re-render immediately, no debounce.
    let on_sort_change = {
        let sort_key = sort_key.clone();
        Callback::from(move |key: SortKey| {
            sort_key.set(key);
        })
    };

    let params = FilterParams {
        query: (*applied_query).clone(),
        sort: *sort_key,
    };
    let view = build_view(catalog_state.videos(), &params);

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-3xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { get_app_name() }
                </h1>

                <ChannelInput
                    loading={*loading}
                    on_submit={on_channel_submit}
                />

                <div class="flex gap-4 items-center mb-4">
                    <SearchBar on_query_change={on_query_change} />
                    <SortDropdown
                        sort={*sort_key}
                        on_sort_change={on_sort_change}
                    />
                </div>

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <p class="text-red-600 text-center mb-4">{ format!("Error: {msg}") }</p>
                        }
                    } else {
                        html! {}
                    }
                }

                <StatsBar
                    total={catalog_state.total_count()}
                    filtered={view.filtered_count}
                    minutes={view.total_minutes}
                />

                {
                    if catalog_state.has_loaded() {
                        html! {
                            { for view.buckets.iter().map(|bucket_view| html! {
                                <BucketSection bucket_view={bucket_view.clone()} />
                            })}
                        }
                    } else {
                        html! {
                            <p class="text-center text-gray-500">
                                {"Load a channel to browse its videos."}
                            </p>
                        }
                    }
                }
            </div>
        </div>
    }
}
