use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdSettings, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
};

use crate::auth::use_auth;
use crate::routes::Route;

#[derive(Clone, Copy, PartialEq)]
enum FeatureIcon {
    Content,
    Users,
    Settings,
    Security,
}

struct Feature {
    icon: FeatureIcon,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: FeatureIcon::Content,
        title: "Content Management",
        description: "Create, edit, and publish content with our rich text editor",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "User Management",
        description: "Manage users with role-based access control",
    },
    Feature {
        icon: FeatureIcon::Settings,
        title: "System Settings",
        description: "Configure your CMS to match your workflow",
    },
    Feature {
        icon: FeatureIcon::Security,
        title: "Secure & Reliable",
        description: "Built with security and performance in mind",
    },
];

/// Public entry point. Signed-in visitors are forwarded to the dashboard.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();

    // Subscribes to the session, so signing in elsewhere re-triggers it.
    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let go_to_auth = move |_: MouseEvent| {
        navigator().push(Route::SignIn {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            section { class: "landing-hero",
                h1 { class: "landing-title", "Modern CMS Platform" }
                p { class: "landing-lead",
                    "A powerful, flexible, and user-friendly content management system designed for modern businesses."
                }
                div { class: "landing-cta",
                    Button { size: ButtonSize::Large, onclick: go_to_auth, "Get Started" }
                    Button {
                        size: ButtonSize::Large,
                        variant: ButtonVariant::Outline,
                        onclick: go_to_auth,
                        "Sign In"
                    }
                }
            }

            section { class: "landing-features",
                for feature in FEATURES.iter() {
                    Card { key: "{feature.title}", class: "landing-feature",
                        CardHeader {
                            span { class: "landing-feature-icon", {feature_icon(feature.icon)} }
                            CardTitle { "{feature.title}" }
                        }
                        CardContent {
                            CardDescription { "{feature.description}" }
                        }
                    }
                }
            }

            Card { class: "landing-signup",
                CardHeader {
                    CardTitle { "Ready to Get Started?" }
                    CardDescription { "Join thousands of businesses already using our CMS platform" }
                }
                CardContent {
                    Button { size: ButtonSize::Large, onclick: go_to_auth, "Create Your Account" }
                }
            }
        }
    }
}

fn feature_icon(icon: FeatureIcon) -> Element {
    match icon {
        FeatureIcon::Content => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 40, height: 40 } },
        FeatureIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 40, height: 40 } },
        FeatureIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 40, height: 40 } },
        FeatureIcon::Security => rsx! { Icon::<LdShield> { icon: LdShield, width: 40, height: 40 } },
    }
}
