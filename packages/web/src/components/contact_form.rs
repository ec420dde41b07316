//! Contact form component

use dioxus::prelude::*;

use crate::api;
use crate::content::SiteContent;
use crate::state::SubmitStatus;
use crate::types::ContactRequest;

/// Contact form - collects a submission and posts it to the server.
///
/// A second submit while one is outstanding is a no-op: the status moves
/// to `Submitting` before the request is dispatched and leaves it on both
/// outcome arms, so the form always returns to a submittable state.
#[component]
pub fn ContactForm(content: SiteContent) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(SubmitStatus::default);

    let heading = content.theme.heading_class();
    let body = content.theme.body_class();
    let submit = content.theme.submit_class();
    let phone_field = content.phone_field;
    let phone_label = phone_field.label();

    let handle_submit = move |_| {
        // Duplicate-submit guard: exactly one request in flight
        if status().is_in_flight() {
            return;
        }
        status.set(SubmitStatus::Submitting);

        let request = ContactRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            phone: phone().trim().to_string(),
            message: message().trim().to_string(),
        };

        spawn(async move {
            match api::submit_contact(&request).await {
                Ok(confirmation) => {
                    status.set(SubmitStatus::Succeeded(confirmation));
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Err(e) => {
                    // Entered values are kept for a manual resubmit
                    status.set(SubmitStatus::Failed(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-lg border border-slate-200 p-6",
            h3 {
                class: "text-2xl font-bold {heading} mb-2",
                "Apply to Partner"
            }
            p {
                class: "{body} mb-6",
                "Fill out the form below and we'll get back to you within 24 hours."
            }

            form {
                class: "space-y-5",
                onsubmit: handle_submit,

                div {
                    label {
                        r#for: "name",
                        class: "block text-sm font-semibold {heading} mb-2",
                        "Name"
                    }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        placeholder: "Your full name",
                        required: true,
                        class: "w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-slate-500"
                    }
                }

                div {
                    label {
                        r#for: "email",
                        class: "block text-sm font-semibold {heading} mb-2",
                        "Email"
                    }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        placeholder: "your.email@example.com",
                        required: true,
                        class: "w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-slate-500"
                    }
                }

                if phone_field.is_shown() {
                    div {
                        label {
                            r#for: "phone",
                            class: "block text-sm font-semibold {heading} mb-2",
                            "{phone_label}"
                        }
                        input {
                            id: "phone",
                            name: "phone",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                            placeholder: "555-123-4567",
                            required: phone_field.is_required(),
                            class: "w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-slate-500"
                        }
                    }
                }

                div {
                    label {
                        r#for: "message",
                        class: "block text-sm font-semibold {heading} mb-2",
                        "Message"
                    }
                    textarea {
                        id: "message",
                        name: "message",
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                        placeholder: "Tell us about your trucking experience and equipment...",
                        rows: "5",
                        required: true,
                        class: "w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-slate-500 resize-none"
                    }
                }

                button {
                    r#type: "submit",
                    disabled: status().is_in_flight(),
                    class: "w-full py-4 rounded-lg text-lg font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed {submit}",
                    if status().is_in_flight() {
                        "Sending..."
                    } else {
                        "Apply Now"
                    }
                }

                if let Some(line) = status().message().map(str::to_string) {
                    p {
                        class: if matches!(status(), SubmitStatus::Succeeded(_)) {
                            "text-sm mt-3 text-center text-green-600"
                        } else {
                            "text-sm mt-3 text-center text-red-600"
                        },
                        "{line}"
                    }
                }
            }
        }
    }
}
