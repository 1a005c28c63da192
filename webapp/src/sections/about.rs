use dioxus::prelude::*;

use portfolio_common::{
    data::{ABOUT_PARAGRAPHS, ABOUT_STATS, HIGHLIGHTS},
    section::SectionId,
};

use super::SectionHeader;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: SectionId::About.id(), class: "page-section",
            div { class: "container section-inner",
                SectionHeader {
                    badge: "About Me".to_owned(),
                    title: "Passionate About Building Digital Experiences".to_owned(),
                }

                div { class: "grid-2",
                    div { class: "about-text",
                        for (i, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }

                        div { class: "grid-2",
                            for stat in ABOUT_STATS {
                                div { key: "{stat.label}",
                                    div { class: "stat-value", "{stat.value}" }
                                    div { class: "stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }

                    div { style: "display: flex; flex-direction: column; gap: var(--space-2);",
                        for highlight in HIGHLIGHTS {
                            div { key: "{highlight.title}", class: "card highlight-card",
                                h3 { "{highlight.title}" }
                                p { "{highlight.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
