//! Home page - the single marketing page

use dioxus::prelude::*;

use crate::components::{ContactForm, CredentialCard};
use crate::content::{SiteContent, Theme};

/// Home page - hero, about, credentials, partnership terms, contact form
#[component]
pub fn Home() -> Element {
    let content = SiteContent::default();
    let theme = content.theme;
    let heading = theme.heading_class();
    let body = theme.body_class();
    let cta = theme.cta_class();

    rsx! {
        div {
            class: "min-h-screen bg-white",

            // Hero Section
            section {
                class: "relative min-h-screen flex items-center justify-center bg-gradient-to-b from-slate-900 to-slate-700",
                div {
                    class: "relative z-10 text-center text-white px-4 max-w-4xl mx-auto py-24",
                    h1 {
                        class: "text-5xl md:text-7xl font-bold mb-6 tracking-tight",
                        "{content.company_name}"
                    }
                    h2 {
                        class: "text-2xl md:text-3xl font-semibold mb-4 text-orange-200",
                        "{content.tagline}"
                    }
                    p {
                        class: "text-xl md:text-2xl mb-4 text-gray-100",
                        "{content.authority_line}"
                    }
                    p {
                        class: "text-lg md:text-xl mb-8 text-gray-200",
                        "{content.hero_pitch}"
                    }
                    a {
                        href: "#contact",
                        class: "inline-block px-12 py-4 text-xl font-bold rounded-full shadow-lg transition-colors {cta}",
                        "{content.cta_label}"
                    }
                }
            }

            // About Section
            section {
                class: "py-20 px-4 bg-slate-50",
                div {
                    class: "max-w-6xl mx-auto",
                    div {
                        class: "text-center mb-16",
                        h2 {
                            class: "text-4xl font-bold {heading} mb-4",
                            "{content.about_heading}"
                        }
                        p {
                            class: "text-lg {body} mt-6 max-w-2xl mx-auto",
                            "{content.about_subheading}"
                        }
                    }

                    div {
                        class: "grid lg:grid-cols-3 gap-8 mb-16",
                        AboutCard {
                            title: "Established Carrier",
                            text: "Licensed carrier with MC and DOT authority, providing owner-operators with quality freight opportunities",
                            theme,
                        }
                        AboutCard {
                            title: "Nationwide Freight",
                            text: "Access to freight lanes across all 48 continental states with established broker relationships",
                            theme,
                        }
                        AboutCard {
                            title: "Owner-Operator Support",
                            text: "Dedicated support for owner-operators with competitive rates and reliable settlements",
                            theme,
                        }
                    }

                    div {
                        class: "max-w-3xl mx-auto space-y-6",
                        for paragraph in content.about_paragraphs {
                            p {
                                class: "text-lg {body} leading-relaxed",
                                "{paragraph}"
                            }
                        }
                    }
                }
            }

            // Credentials Section
            section {
                class: "py-20 px-4 bg-white",
                div {
                    class: "max-w-6xl mx-auto",
                    div {
                        class: "text-center mb-16",
                        h2 {
                            class: "text-4xl font-bold {heading} mb-4",
                            "{content.credentials_heading}"
                        }
                        p {
                            class: "text-lg {body} mt-6 max-w-2xl mx-auto",
                            "{content.credentials_subheading}"
                        }
                    }

                    div {
                        class: "grid md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for credential in content.credentials.iter().cloned() {
                            CredentialCard { credential, theme }
                        }
                    }
                }
            }

            // Partnership Terms Section
            section {
                class: "py-20 px-4 bg-slate-50",
                div {
                    class: "max-w-4xl mx-auto",
                    div {
                        class: "text-center mb-16",
                        h2 {
                            class: "text-4xl font-bold {heading} mb-4",
                            "{content.terms_heading}"
                        }
                    }

                    div {
                        class: "grid md:grid-cols-2 gap-8",
                        div {
                            class: "bg-white rounded-lg shadow-lg p-8",
                            h3 {
                                class: "text-2xl font-bold {heading} mb-6",
                                "Compensation"
                            }
                            div {
                                class: "space-y-4",
                                for term in content.compensation_terms {
                                    div {
                                        class: "flex items-center",
                                        span {
                                            class: "w-24 shrink-0 font-bold {heading}",
                                            "{term.lead}"
                                        }
                                        p { class: "{body}", "{term.text}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "bg-white rounded-lg shadow-lg p-8",
                            h3 {
                                class: "text-2xl font-bold {heading} mb-6",
                                "Responsibilities"
                            }
                            div {
                                class: "space-y-4",
                                for term in content.responsibility_terms {
                                    div {
                                        class: "flex items-center",
                                        span {
                                            class: "w-24 shrink-0 font-bold {heading}",
                                            "{term.lead}"
                                        }
                                        p { class: "{body}", "{term.text}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "mt-12 bg-white rounded-lg shadow-lg p-8 text-center",
                        h3 {
                            class: "text-2xl font-bold {heading} mb-4",
                            "Independent Contractor Status"
                        }
                        p {
                            class: "{body} leading-relaxed",
                            "{content.contractor_note}"
                        }
                    }
                }
            }

            // Contact Section
            section {
                id: "contact",
                class: "py-20 px-4 bg-white",
                div {
                    class: "max-w-4xl mx-auto",
                    div {
                        class: "text-center mb-16",
                        h2 {
                            class: "text-4xl font-bold {heading} mb-4",
                            "{content.contact_heading}"
                        }
                        p {
                            class: "text-lg {body} mt-4 max-w-2xl mx-auto",
                            "{content.contact_pitch}"
                        }
                    }

                    div {
                        class: "grid md:grid-cols-2 gap-12",
                        div {
                            h3 {
                                class: "text-2xl font-bold {heading} mb-6",
                                "Company Information"
                            }
                            div {
                                class: "space-y-6",
                                div {
                                    p { class: "font-semibold {heading}", "Email" }
                                    p { class: "{body}", "{content.contact_email}" }
                                }
                                div {
                                    p { class: "font-semibold {heading}", "Address" }
                                    p { class: "{body}", "{content.contact_address}" }
                                }
                            }
                        }
                        ContactForm { content: content.clone() }
                    }
                }
            }

            // Footer
            footer {
                class: "bg-gray-900 text-white py-12 px-4",
                div {
                    class: "max-w-4xl mx-auto",
                    div {
                        class: "grid md:grid-cols-3 gap-8 text-center md:text-left",
                        div {
                            h3 { class: "text-xl font-semibold mb-4", "{content.company_name}" }
                            p { class: "text-gray-400", "{content.tagline}" }
                        }
                        div {
                            h4 { class: "text-lg font-semibold mb-4", "Contact" }
                            p { class: "text-gray-400", "{content.contact_email}" }
                        }
                        div {
                            h4 { class: "text-lg font-semibold mb-4", "Authority" }
                            p { class: "text-gray-400", "{content.authority_line}" }
                        }
                    }
                    div {
                        class: "mt-8 pt-8 border-t border-gray-700 text-center text-gray-400",
                        p { "\u{00a9} 2024 Tiger Hill Transport LLC. All rights reserved." }
                    }
                }
            }
        }
    }
}

/// One feature card in the about section
#[component]
fn AboutCard(title: &'static str, text: &'static str, theme: Theme) -> Element {
    let heading = theme.heading_class();
    let body = theme.body_class();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-lg p-8 text-center",
            h3 {
                class: "text-2xl font-bold {heading} mb-4",
                "{title}"
            }
            p {
                class: "{body} text-lg",
                "{text}"
            }
        }
    }
}
