mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use education::EducationSection;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    badge: String,
    title: String,
}

// the badge + headline pair every content section opens with
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            span { class: "badge", "{props.badge}" }
            h2 { "{props.title}" }
        }
    }
}
