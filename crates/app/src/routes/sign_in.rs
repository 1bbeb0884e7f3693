use backend::AuthClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input,
};

use crate::auth::use_auth;
use crate::notify::{notify, Severity};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Enter your credentials to access your account",
            AuthMode::SignUp => "Sign up to start managing content",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Signing in...",
            AuthMode::SignUp => "Creating account...",
        }
    }

    pub fn toggle_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? Sign up",
            AuthMode::SignUp => "Already have an account? Sign in",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

/// Email and password sign-in, with a sign-up mode.
#[component]
pub fn SignIn() -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let mut mode = use_signal(|| AuthMode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        let client = AuthClient::from_app_config();
        let current_mode = mode();
        let result = match current_mode {
            AuthMode::SignIn => client
                .sign_in_with_password(&email(), &password())
                .await
                .map(Some),
            AuthMode::SignUp => client.sign_up(&email(), &password(), &full_name()).await,
        };

        match result {
            Ok(Some(session)) => {
                auth.establish(session).await;
                navigator().push(Route::Dashboard {});
            }
            Ok(None) => {
                notify(
                    &toasts,
                    "Check your email",
                    "Confirm your address, then sign in.",
                    Severity::Info,
                );
                mode.set(AuthMode::SignIn);
                password.set(String::new());
            }
            Err(e) => {
                tracing::warn!(error = %e, mode = ?current_mode, "Authentication failed");
                error_msg.set(Some(e.friendly_message()));
            }
        }
        loading.set(false);
    };

    let current = mode();
    let password_autocomplete = match current {
        AuthMode::SignIn => "current-password",
        AuthMode::SignUp => "new-password",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sign_in.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    span { class: "auth-icon",
                        Icon::<LdLock> { icon: LdLock, width: 28, height: 28 }
                    }
                    CardTitle { "{current.title()}" }
                    CardDescription { "{current.description()}" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { onsubmit: handle_submit,
                        if current == AuthMode::SignUp {
                            Input {
                                id: "full_name",
                                label: "Full Name",
                                placeholder: "Jane Doe",
                                autocomplete: "name",
                                value: full_name(),
                                on_input: move |e: FormEvent| full_name.set(e.value()),
                            }
                        }
                        Input {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            autocomplete: "email",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            autocomplete: "{password_autocomplete}",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            busy: loading(),
                            busy_label: "{current.busy_label()}",
                            "{current.title()}"
                        }
                    }
                }

                CardFooter {
                    button {
                        class: "auth-toggle",
                        r#type: "button",
                        onclick: move |_| {
                            error_msg.set(None);
                            mode.set(current.toggled());
                        },
                        "{current.toggle_prompt()}"
                    }
                }
            }
        }
    }
}
