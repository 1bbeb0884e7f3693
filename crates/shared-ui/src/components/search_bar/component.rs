use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Text box with a leading search icon. Emits the raw value on every keystroke.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            span { class: "search-bar-icon",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                class: "search-bar-input",
                r#type: "search",
                "aria-label": "{placeholder}",
                placeholder: "{placeholder}",
                value: value,
                oninput: move |evt: FormEvent| on_search.call(evt.value()),
            }
        }
    }
}
