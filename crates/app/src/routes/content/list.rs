use backend::{ContentStore, RestContentStore};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdFileText, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{can_perform, empty_state, Action, ContentItem, EmptyState, UserRole};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    ConfirmDialog, PageHeader, SearchBar, SkeletonList,
};

use super::state::ContentListState;
use crate::auth::{use_auth, use_user_role};
use crate::format_helpers::{format_date_human, status_badge_variant};
use crate::notify::show;
use crate::routes::Route;

/// Searchable list of content records with role-gated actions.
#[component]
pub fn ContentList() -> Element {
    let auth = use_auth();
    let role = use_user_role();
    let toasts = use_toast();
    let mut state = use_signal(ContentListState::new);
    let mut search = use_signal(String::new);

    // Nothing reactive is read, so this runs once per mount and is dropped
    // with the screen.
    let _content = use_resource(move || async move {
        let store = RestContentStore::from_app_config(auth.access_token());
        let result = store.list_content().await;
        if let Some(notice) = state.write().finish_fetch(result) {
            show(&toasts, &notice);
        }
    });

    let run_delete = move |id: String| {
        if !state.write().confirm_delete(&id) {
            tracing::debug!(content_id = %id, "Delete already in flight");
            return;
        }
        spawn(async move {
            let store = RestContentStore::from_app_config(auth.access_token());
            let result = store.delete_content(&id).await;
            let notice = state.write().finish_delete(&id, result);
            show(&toasts, &notice);
        });
    };

    let header = rsx! {
        PageHeader {
            title: "Content Management",
            subtitle: "Manage your website content",
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::Dashboard {});
                    },
                    "Dashboard"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| auth.sign_out(),
                    "Sign Out"
                }
            },
        }
    };

    if state.read().is_loading() {
        return rsx! {
            div { class: "container",
                {header}
                p { class: "content-loading", "Loading content..." }
                SkeletonList { rows: 3 }
            }
        };
    }

    let term = search();
    let visible = state.read().visible(&term);

    // The prompt carries the id it was opened for.
    let target = state.read().confirming().map(str::to_string);
    let confirmation = target.map(|id| {
        rsx! {
            ConfirmDialog {
                open: true,
                on_open_change: move |open: bool| {
                    if !open {
                        state.write().dismiss_confirmation();
                    }
                },
                title: "Delete content",
                description: "Are you sure you want to delete this content?",
                confirm_label: "Delete",
                on_confirm: move |_| run_delete(id.clone()),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./content.css") }

        div { class: "container",
            {header}

            ContentToolbar {
                search: term.clone(),
                role: role,
                on_search: move |v: String| search.set(v),
                on_create: move |_| {
                    navigator().push(Route::ContentCreate {});
                },
            }

            if visible.is_empty() {
                ContentEmptyState {
                    empty: empty_state(&term, role),
                    on_create: move |_| {
                        navigator().push(Route::ContentCreate {});
                    },
                }
            } else {
                div { class: "content-grid",
                    for item in visible {
                        ContentCard {
                            key: "{item.id}",
                            deleting: state.read().is_deleting(&item.id),
                            item: item.clone(),
                            role: role,
                            on_view: move |id: String| {
                                navigator().push(Route::ContentView { id });
                            },
                            on_edit: move |id: String| {
                                navigator().push(Route::ContentEdit { id });
                            },
                            on_delete: move |id: String| state.write().request_delete(&id),
                        }
                    }
                }
            }

            {confirmation}
        }
    }
}

/// Search box plus the Create button for roles that may create.
#[component]
pub fn ContentToolbar(
    search: String,
    role: UserRole,
    on_search: EventHandler<String>,
    on_create: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "content-toolbar",
            SearchBar {
                value: search,
                placeholder: "Search content...",
                on_search: move |v: String| on_search.call(v),
            }
            if can_perform(Action::Create, role) {
                Button { onclick: move |evt| on_create.call(evt), "Create Content" }
            }
        }
    }
}

/// One content record. Buttons are shown per role; the backend still decides
/// whether the action is allowed.
#[component]
pub fn ContentCard(
    item: ContentItem,
    role: UserRole,
    #[props(default = false)] deleting: bool,
    on_view: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let view_id = item.id.clone();
    let edit_id = item.id.clone();
    let delete_id = item.id.clone();
    let created = format_date_human(&item.created_at);

    rsx! {
        Card { class: "content-card",
            CardHeader { class: "content-card-header",
                CardTitle { class: "content-card-title", "{item.title}" }
                Badge { variant: status_badge_variant(item.status), "{item.status.as_str()}" }
            }
            CardContent {
                p { class: "content-card-excerpt", "{item.excerpt}" }
                div { class: "content-card-meta",
                    span { class: "content-card-author",
                        Icon::<LdUsers> { icon: LdUsers, width: 12, height: 12 }
                        "{item.author_name()}"
                    }
                    span { class: "content-card-date",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                        "{created}"
                    }
                }
                div { class: "content-card-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| on_view.call(view_id.clone()),
                        "View"
                    }
                    if can_perform(Action::Edit, role) {
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| on_edit.call(edit_id.clone()),
                            "Edit"
                        }
                    }
                    if can_perform(Action::Delete, role) {
                        Button {
                            class: "content-card-delete",
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            busy: deleting,
                            busy_label: "Deleting...",
                            onclick: move |_| on_delete.call(delete_id.clone()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContentEmptyState(empty: EmptyState, on_create: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "content-empty",
            span { class: "content-empty-icon",
                Icon::<LdFileText> { icon: LdFileText, width: 48, height: 48 }
            }
            h3 { class: "content-empty-heading", "{empty.heading}" }
            p { class: "content-empty-message", "{empty.message}" }
            if empty.show_create {
                Button { onclick: move |evt| on_create.call(evt), "Create Content" }
            }
        }
    }
}
