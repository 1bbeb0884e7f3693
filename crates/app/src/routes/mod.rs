pub mod content;
pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod sign_in;
pub mod unavailable;

use crate::auth::{guard_outcome, use_auth, GuardOutcome};
use dioxus::prelude::*;

use content::{ContentList, ContentView};
use dashboard::Dashboard;
use landing::Landing;
use not_found::NotFound;
use sign_in::SignIn;
use unavailable::Unavailable;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    SignIn {},
    #[layout(ProtectedRoute)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/content")]
    ContentList {},
    #[route("/content/new")]
    ContentCreate {},
    #[route("/content/:id/view")]
    ContentView { id: String },
    #[route("/content/:id/edit")]
    ContentEdit { id: String },
    #[route("/users")]
    Users {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Layout for signed-in screens. Without a session it renders a placeholder
/// and sends the visitor to the sign-in screen; the outlet is never mounted.
#[component]
fn ProtectedRoute() -> Element {
    let auth = use_auth();

    use_effect(move || {
        if guard_outcome(auth.is_authenticated()) == GuardOutcome::Redirect {
            tracing::debug!("No session, redirecting to sign-in");
            navigator().replace(Route::SignIn {});
        }
    });

    match guard_outcome(auth.is_authenticated()) {
        GuardOutcome::Render => rsx! { Outlet::<Route> {} },
        GuardOutcome::Redirect => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to sign in..." }
            }
        },
    }
}

#[component]
fn ContentCreate() -> Element {
    rsx! { Unavailable { feature: "Content editor" } }
}

#[component]
fn ContentEdit(id: String) -> Element {
    rsx! { Unavailable { feature: "Editing content {id}" } }
}

#[component]
fn Users() -> Element {
    rsx! { Unavailable { feature: "User management" } }
}

#[component]
fn Settings() -> Element {
    rsx! { Unavailable { feature: "Settings" } }
}
