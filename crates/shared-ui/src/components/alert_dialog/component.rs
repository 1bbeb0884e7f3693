use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

pub use dioxus_primitives::alert_dialog::{
    AlertDialogActions, AlertDialogDescription, AlertDialogTitle,
};

/// Modal overlay for a destructive confirmation.
#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "button alert-dialog-confirm",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

#[component]
pub fn AlertDialogCancel(mut props: prim::AlertDialogCancelProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "button alert-dialog-cancel",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogCancel { ..props }
    }
}

/// Yes/no confirmation built on the alert dialog parts.
///
/// `on_confirm` fires when the user accepts; the dialog closes itself either way
/// through `on_open_change`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    description: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open: open,
            on_open_change: move |v| on_open_change.call(v),
            AlertDialogContent {
                AlertDialogTitle { class: "alert-dialog-title", "{title}" }
                AlertDialogDescription { class: "alert-dialog-description", "{description}" }
                AlertDialogActions { class: "alert-dialog-actions",
                    AlertDialogCancel { "{cancel_label}" }
                    AlertDialogAction {
                        on_click: move |evt| on_confirm.call(evt),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
