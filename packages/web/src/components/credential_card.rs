//! Credential card component

use dioxus::prelude::*;

use crate::content::{Credential, Theme};

/// One required document in the credentials grid
#[component]
pub fn CredentialCard(credential: Credential, theme: Theme) -> Element {
    let heading = theme.heading_class();
    let body = theme.body_class();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-lg p-6 text-center hover:shadow-xl transition-shadow",
            div {
                class: "mx-auto w-16 h-16 bg-slate-100 rounded-full flex items-center justify-center mb-6 text-3xl",
                "{credential.icon}"
            }
            h3 {
                class: "text-xl font-bold {heading} mb-3",
                "{credential.name}"
            }
            p {
                class: "{body} leading-relaxed",
                "{credential.description}"
            }
        }
    }
}
