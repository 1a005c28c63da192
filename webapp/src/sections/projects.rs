use std::sync::Arc;

use dioxus::prelude::*;

use portfolio_common::{
    config::SiteConfig,
    data::{PROJECTS, Project},
    section::SectionId,
};

use super::SectionHeader;

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "card",
            div { class: "project-head",
                h3 { "{project.title}" }
                if project.links.is_some() {
                    div { class: "project-links",
                        if let Some(url) = project.source() {
                            a {
                                href: url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "{project.title} GitHub",
                                "Code"
                            }
                        }
                        if let Some(url) = project.demo() {
                            a {
                                href: url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "{project.title} Live Demo",
                                "Demo ↗"
                            }
                        }
                    }
                }
            }
            p { class: "project-desc", "{project.description}" }

            if !project.tech_stack.is_empty() {
                div { class: "tech-stack",
                    for tech in project.tech_stack {
                        span { key: "{tech}", class: "badge", "{tech}" }
                    }
                }
            }

            if !project.features.is_empty() {
                div { class: "separator" }
                h4 { "Key Features:" }
                ul { class: "feature-list",
                    for (i, feature) in project.features.iter().enumerate() {
                        li { key: "{i}", "{feature}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let config = use_context::<Arc<SiteConfig>>();

    rsx! {
        section { id: SectionId::Projects.id(), class: "page-section",
            div { class: "container section-inner",
                SectionHeader {
                    badge: "Featured Projects".to_owned(),
                    title: "Projects I've Built".to_owned(),
                }

                div { class: "grid-2",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        ProjectCard { key: "{i}", project: *project }
                    }
                }

                div { class: "projects-trailer",
                    div { class: "card card-dashed",
                        p { class: "project-desc", "More exciting projects coming soon..." }
                        a {
                            class: "accent-blue",
                            href: "{config.contact.github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Check out my GitHub ↗"
                        }
                    }
                }
            }
        }
    }
}
