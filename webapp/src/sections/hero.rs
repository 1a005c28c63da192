use std::sync::Arc;

use dioxus::prelude::*;

use portfolio_common::{
    config::SiteConfig, data::FOCUS_AREAS, nav::reveal_section, section::SectionId,
};

use crate::common::browser::{BrowserViewport, open_in_new_tab};

#[component]
pub fn Hero() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let owner = &config.owner;
    let contact = &config.contact;

    let resume = contact.resume_path.clone();

    rsx! {
        section { id: SectionId::Hero.id(), class: "page-section hero",
            div { class: "container",
                div { class: "hero-content",
                    div {
                        span { class: "badge badge-outline", "✦ {owner.availability}" }
                    }

                    h1 { class: "hero-title",
                        span { "Hi, I'm" }
                        span { class: "name", "{owner.name}" }
                    }
                    p { class: "hero-role", "{owner.role}" }
                    p { class: "hero-tagline", "{owner.tagline}" }

                    div { class: "grid-3",
                        for area in FOCUS_AREAS {
                            div { key: "{area.label}", class: "card focus-card",
                                p { class: "label accent-{area.accent}", "{area.label}" }
                                p { class: "hero-tagline", "{area.summary}" }
                            }
                        }
                    }

                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                // a missing contact section is already logged
                                let _found = reveal_section(&BrowserViewport, SectionId::Contact);
                            },
                            "Get In Touch →"
                        }
                        button {
                            class: "btn btn-outline",
                            title: "View Resume in new tab",
                            onclick: move |_| open_in_new_tab(&resume),
                            "View Resume ↗"
                        }

                        div { class: "social-links",
                            a {
                                class: "social-link accent-amber soft-amber",
                                href: "{contact.github_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "GitHub Profile",
                                "GitHub"
                            }
                            a {
                                class: "social-link accent-emerald soft-emerald",
                                href: "{contact.linkedin_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "LinkedIn Profile",
                                "LinkedIn"
                            }
                            a {
                                class: "social-link accent-blue soft-blue",
                                href: contact.mailto(),
                                aria_label: "Email",
                                "Email"
                            }
                        }
                    }
                }
            }

            div { class: "scroll-indicator" }
        }
    }
}
