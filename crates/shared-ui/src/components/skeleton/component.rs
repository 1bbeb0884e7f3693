use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { "aria-hidden": "true", ..merged }
    }
}

/// A stack of `rows` skeleton cards.
#[component]
pub fn SkeletonList(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-list", "aria-busy": "true",
            for i in 0..rows {
                div { key: "{i}", class: "skeleton-card",
                    Skeleton { class: "skeleton-line skeleton-line-title" }
                    Skeleton { class: "skeleton-line" }
                    Skeleton { class: "skeleton-line skeleton-line-short" }
                }
            }
        }
    }
}
