use dioxus::prelude::*;

use portfolio_common::{
    data::{EDUCATION, Education},
    section::SectionId,
};

use super::SectionHeader;

#[derive(Clone, PartialEq, Props)]
struct EducationCardProps {
    entry: Education,
}

#[component]
fn EducationCard(props: EducationCardProps) -> Element {
    let entry = props.entry;

    rsx! {
        div { class: "card education-entry",
            div {
                h3 { "🎓 {entry.degree}" }
                p { class: "meta", "{entry.institution}" }
                p { class: "meta", "{entry.years}" }
            }
            if let Some(score) = entry.score {
                div { class: "score",
                    div { class: "value", "{score.value()}" }
                    div { class: "meta", "{score.label()}" }
                }
            }
        }
    }
}

#[component]
pub fn EducationSection() -> Element {
    rsx! {
        section { id: SectionId::Education.id(), class: "page-section alt",
            div { class: "container section-inner",
                SectionHeader {
                    badge: "Education".to_owned(),
                    title: "Academic Background".to_owned(),
                }

                div { style: "display: flex; flex-direction: column; gap: var(--space-3);",
                    for (i, entry) in EDUCATION.iter().enumerate() {
                        EducationCard { key: "{i}", entry: *entry }
                    }
                }
            }
        }
    }
}
