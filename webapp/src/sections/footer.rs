use std::sync::Arc;

use dioxus::prelude::*;

use portfolio_common::config::SiteConfig;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let owner = &config.owner;
    let contact = &config.contact;

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { "{owner.name}" }
                        div { class: "footer-bar" }
                        p { class: "footer-blurb", "{owner.blurb}" }
                    }

                    div { class: "footer-social",
                        h4 { "CONNECT" }
                        div { class: "social-links",
                            a {
                                href: "{contact.github_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "GitHub",
                                title: "GitHub",
                                "GitHub"
                            }
                            a {
                                href: "{contact.linkedin_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "LinkedIn",
                                title: "LinkedIn",
                                "LinkedIn"
                            }
                            a {
                                href: contact.mailto(),
                                aria_label: "Email",
                                title: "Email",
                                "Email"
                            }
                        }
                    }
                }

                div { class: "separator" }

                p { class: "footer-sign-off", "Made with ❤️ by {owner.short_name}" }
            }
        }
    }
}
