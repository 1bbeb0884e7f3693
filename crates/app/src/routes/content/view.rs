use std::future::Future;

use backend::{ContentStore, RestContentStore};
use dioxus::prelude::*;
use shared_types::{can_perform, Action, AppErrorKind};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, SkeletonList,
};

use crate::auth::{use_auth, use_user_role};
use crate::format_helpers::{format_date_human, status_badge_variant};
use crate::routes::Route;

/// Run `load` for `id`, and again whenever the router hands this screen a
/// different id.
fn use_record<T, F, Fut>(id: String, mut load: F) -> Resource<T>
where
    T: 'static,
    F: FnMut(String) -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
{
    use_resource(use_reactive!(|id| load(id)))
}

/// Read-only page for a single content record.
#[component]
pub fn ContentView(id: String) -> Element {
    let auth = use_auth();
    let role = use_user_role();

    let content = use_record(id, move |id| async move {
        let store = RestContentStore::from_app_config(auth.access_token());
        let result = store.get_content(&id).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, content_id = %id, "Error fetching content item");
        }
        result
    });

    let back = rsx! {
        Button {
            variant: ButtonVariant::Outline,
            onclick: move |_| {
                navigator().push(Route::ContentList {});
            },
            "Back to Content"
        }
    };

    let body = match &*content.read() {
        None => rsx! { SkeletonList { rows: 1 } },
        Some(Err(e)) => {
            let message = if e.kind == AppErrorKind::NotFound {
                "This content does not exist or you do not have access to it.".to_string()
            } else {
                e.friendly_message()
            };
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Content unavailable" }
                        CardDescription { "{message}" }
                    }
                }
            }
        }
        Some(Ok(item)) => {
            let edit_id = item.id.clone();
            let published = item
                .published_at
                .as_deref()
                .map(format_date_human)
                .unwrap_or_else(|| "Not published".to_string());
            rsx! {
                Card { class: "content-detail",
                    CardHeader {
                        CardTitle { "{item.title}" }
                        Badge { variant: status_badge_variant(item.status), "{item.status.as_str()}" }
                    }
                    CardContent {
                        dl { class: "content-detail-fields",
                            dt { "Slug" }
                            dd { code { "{item.slug}" } }
                            dt { "Author" }
                            dd { "{item.author_name()}" }
                            dt { "Created" }
                            dd { "{format_date_human(&item.created_at)}" }
                            dt { "Published" }
                            dd { "{published}" }
                        }
                        p { class: "content-detail-excerpt", "{item.excerpt}" }
                        if can_perform(Action::Edit, role) {
                            Button {
                                onclick: move |_| {
                                    navigator().push(Route::ContentEdit { id: edit_id.clone() });
                                },
                                "Edit"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./content.css") }

        div { class: "container narrow",
            PageHeader { title: "View Content", actions: back }
            {body}
        }
    }
}
