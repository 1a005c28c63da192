use std::sync::Arc;

use dioxus::prelude::*;

use portfolio_common::{config::SiteConfig, section::SectionId};

use super::SectionHeader;

#[derive(Clone, PartialEq, Props)]
struct ContactCardProps {
    label: String,
    accent: String,
    text: String,
    href: String,
    action: String,
    // mailto links stay in the current tab
    external: bool,
}

#[component]
fn ContactCard(props: ContactCardProps) -> Element {
    let target = if props.external { "_blank" } else { "_self" };

    rsx! {
        div { class: "card contact-card",
            p { class: "label accent-{props.accent}", "{props.label}" }
            a {
                href: "{props.href}",
                target: "{target}",
                rel: "noopener noreferrer",
                "{props.text}"
            }
            a {
                class: "btn btn-outline btn-block",
                href: "{props.href}",
                target: "{target}",
                rel: "noopener noreferrer",
                "{props.action}"
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let contact = &config.contact;

    rsx! {
        section { id: SectionId::Contact.id(), class: "page-section",
            div { class: "container section-inner",
                SectionHeader {
                    badge: "Get In Touch".to_owned(),
                    title: "Let's Connect".to_owned(),
                }

                div { class: "grid-3",
                    ContactCard {
                        label: "Email".to_owned(),
                        accent: "blue".to_owned(),
                        text: contact.email.clone(),
                        href: contact.mailto(),
                        action: "Send Email".to_owned(),
                        external: false,
                    }
                    ContactCard {
                        label: "GitHub".to_owned(),
                        accent: "amber".to_owned(),
                        text: contact.github_handle.clone(),
                        href: contact.github_url.clone(),
                        action: "Visit Profile".to_owned(),
                        external: true,
                    }
                    ContactCard {
                        label: "LinkedIn".to_owned(),
                        accent: "emerald".to_owned(),
                        text: contact.linkedin_handle.clone(),
                        href: contact.linkedin_url.clone(),
                        action: "Connect".to_owned(),
                        external: true,
                    }
                }

                div { class: "card cta-card",
                    h3 { "Open to Opportunities" }
                    p {
                        "I'm actively looking for full-time roles, internships, and freelance projects. Let's create something amazing together!"
                    }
                    div { class: "hero-actions", style: "justify-content: flex-start;",
                        a { class: "btn btn-primary", href: contact.mailto(), "Send Email" }
                        a {
                            class: "btn btn-outline",
                            href: "{contact.linkedin_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Connect on LinkedIn"
                        }
                    }
                }
            }
        }
    }
}
