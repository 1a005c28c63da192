use dioxus::prelude::*;

use portfolio_common::{
    data::{SKILL_CATEGORIES, SkillCategory, skills_in},
    section::SectionId,
};

use super::SectionHeader;

#[derive(Clone, PartialEq, Props)]
struct SkillCardProps {
    category: SkillCategory,
}

#[component]
fn SkillCard(props: SkillCardProps) -> Element {
    let category = props.category;
    let accent = category.accent();

    rsx! {
        div { class: "card skill-card",
            h3 { class: "accent-{accent}", "▤ {category}" }
            for skill in skills_in(category) {
                div { key: "{skill.name}",
                    div { class: "skill-row",
                        span { "{skill.name}" }
                        span { class: "skill-level", "{skill.level}%" }
                    }
                    div { class: "skill-track",
                        div { class: "skill-fill bar-{accent}", style: skill.width_style() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: SectionId::Skills.id(), class: "page-section alt",
            div { class: "container section-inner",
                SectionHeader {
                    badge: "Skills & Technologies".to_owned(),
                    title: "Technologies I Work With".to_owned(),
                }

                div { class: "grid-2",
                    for category in SKILL_CATEGORIES {
                        SkillCard { key: "{category}", category: *category }
                    }
                }
            }
        }
    }
}
