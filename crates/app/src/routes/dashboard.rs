use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdFileText, LdFolder, LdLayoutDashboard, LdPlus, LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
};

use crate::auth::{use_auth, use_user_role};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Create,
    Content,
    Folder,
    Users,
    Settings,
    Layout,
}

fn glyph(g: Glyph, size: u32) -> Element {
    match g {
        Glyph::Create => rsx! { Icon::<LdPlus> { icon: LdPlus, width: size, height: size } },
        Glyph::Content => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        Glyph::Folder => rsx! { Icon::<LdFolder> { icon: LdFolder, width: size, height: size } },
        Glyph::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        Glyph::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        Glyph::Layout => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } }
        }
    }
}

/// An entry in the dashboard's action menu.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
    pub roles: &'static [UserRole],
    glyph: Glyph,
}

pub fn quick_actions() -> [QuickAction; 4] {
    [
        QuickAction {
            title: "Create Content",
            description: "Write a new article or page",
            route: Route::ContentCreate {},
            roles: &[UserRole::Admin, UserRole::Editor],
            glyph: Glyph::Create,
        },
        QuickAction {
            title: "Manage Content",
            description: "View and edit existing content",
            route: Route::ContentList {},
            roles: &[UserRole::Admin, UserRole::Editor, UserRole::Viewer],
            glyph: Glyph::Folder,
        },
        QuickAction {
            title: "Manage Users",
            description: "Add and manage user accounts",
            route: Route::Users {},
            roles: &[UserRole::Admin],
            glyph: Glyph::Users,
        },
        QuickAction {
            title: "Settings",
            description: "Configure system settings",
            route: Route::Settings {},
            roles: &[UserRole::Admin],
            glyph: Glyph::Settings,
        },
    ]
}

/// Actions whose role list contains `role`, in menu order.
pub fn visible_actions(role: UserRole) -> Vec<QuickAction> {
    quick_actions()
        .into_iter()
        .filter(|a| a.roles.contains(&role))
        .collect()
}

struct Stat {
    title: &'static str,
    value: &'static str,
    glyph: Glyph,
}

// Placeholder figures until the backend exposes aggregates.
const STATS: [Stat; 4] = [
    Stat { title: "Total Content", value: "24", glyph: Glyph::Content },
    Stat { title: "Published", value: "18", glyph: Glyph::Layout },
    Stat { title: "Drafts", value: "6", glyph: Glyph::Content },
    Stat { title: "Users", value: "12", glyph: Glyph::Users },
];

const RECENT_ACTIVITY: [(&str, &str, &str); 3] = [
    ("Welcome article published", "2 hours ago", "Admin User"),
    ("New user registered", "1 day ago", "System"),
    ("Content updated", "3 days ago", "Editor User"),
];

/// Landing screen after sign-in.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let role = use_user_role();
    let email = auth
        .current_user()
        .map(|u| u.email_or_blank().to_string())
        .unwrap_or_default();
    let actions = visible_actions(role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            PageHeader {
                title: "Dashboard",
                subtitle: "Welcome back, {email} ({role})",
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| auth.sign_out(),
                        "Sign Out"
                    }
                },
            }

            section { class: "stat-grid",
                for stat in STATS.iter() {
                    Card { key: "{stat.title}", class: "stat-card",
                        CardHeader { class: "stat-card-header",
                            CardTitle { class: "stat-title", "{stat.title}" }
                            span { class: "stat-icon", {glyph(stat.glyph, 16)} }
                        }
                        CardContent {
                            div { class: "stat-value", "{stat.value}" }
                        }
                    }
                }
            }

            section { class: "quick-actions",
                h2 { class: "section-title", "Quick Actions" }
                div { class: "action-grid",
                    for action in actions {
                        Card { key: "{action.title}", class: "action-card",
                            CardHeader {
                                CardTitle { class: "action-title",
                                    {glyph(action.glyph, 20)}
                                    "{action.title}"
                                }
                            }
                            CardContent {
                                CardDescription { "{action.description}" }
                                Button {
                                    class: "action-button",
                                    onclick: {
                                        let route = action.route.clone();
                                        move |_| {
                                            navigator().push(route.clone());
                                        }
                                    },
                                    "Get Started"
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "activity-card",
                CardHeader {
                    CardTitle { class: "action-title",
                        Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                        "Recent Activity"
                    }
                }
                CardContent {
                    ul { class: "activity-list",
                        for (what, when, who) in RECENT_ACTIVITY {
                            li { key: "{what}", class: "activity-row",
                                div {
                                    p { class: "activity-what", "{what}" }
                                    p { class: "activity-when", "{when}" }
                                }
                                span { class: "activity-who", "{who}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
