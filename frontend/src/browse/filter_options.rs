use catalog::engine::SortKey;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::{function_component, html, Callback, Html, Properties};

pub fn sort_key_display_name(key: SortKey) -> &'static str {
    match key {
        SortKey::UploadDate => "Upload date",
        SortKey::Comments => "Comments",
        SortKey::Views => "Views",
    }
}

pub fn all_sort_keys() -> Vec<SortKey> {
    vec![SortKey::UploadDate, SortKey::Comments, SortKey::Views]
}

// Keys used in <option value="..."> so we can reliably map back and forth.
fn sort_key_value(key: SortKey) -> &'static str {
    match key {
        SortKey::UploadDate => "upload_date",
        SortKey::Comments => "comments",
        SortKey::Views => "views",
    }
}

fn sort_key_from_value(value: &str) -> Option<SortKey> {
    match value {
        "upload_date" => Some(SortKey::UploadDate),
        "comments" => Some(SortKey::Comments),
        "views" => Some(SortKey::Views),
        _ => None,
    }
}

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct SortDropdownProps {
    pub sort: SortKey,
    pub on_sort_change: Callback<SortKey>,
}

#[function_component(SortDropdown)]
pub fn sort_dropdown(props: &SortDropdownProps) -> Html {
    let on_change = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                if let Some(key) = sort_key_from_value(&value) {
                    on_sort_change.emit(key);
                }
            }
        })
    };

    let current_value = sort_key_value(props.sort).to_string();

    html! {
        <label class="search-option">
            { "Sort by" }
            <select value={current_value} onchange={on_change}>
                {
                    for all_sort_keys().into_iter().map(|key| {
                        html! {
                            <option value={sort_key_value(key)} selected={key == props.sort}>
                                { sort_key_display_name(key) }
                            </option>
                        }
                    })
                }
            </select>
        </label>
    }
}
