use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Placeholder for screens that exist in the route table but ship later.
#[component]
pub fn Unavailable(feature: String) -> Element {
    rsx! {
        div { class: "container narrow",
            Card {
                CardHeader {
                    CardTitle { "{feature}" }
                    CardDescription { "This screen is not available in this build." }
                }
                CardContent {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::Dashboard {});
                        },
                        "Back to Dashboard"
                    }
                }
            }
        }
    }
}
