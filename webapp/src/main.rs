#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error};

use portfolio_common::{
    config::read_config,
    data::validate_tables,
    theme::{Theme, apply_theme_class},
};

mod common;

mod components;
use components::{navigation::NavBar, scroll::ScrollProvider, scroll_top::ScrollToTop};

mod sections;
use sections::{About, Contact, EducationSection, Footer, Hero, Projects, Skills};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // the tables are compiled in, so a failure here is a bad edit; render anyway and let
    // the console say what is wrong
    if let Err(err) = validate_tables() {
        error!("portfolio data failed validation: {err}");
    }

    launch(App);
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(read_config);
    // not persisted: every load starts from the default dark theme
    let theme = use_context_provider(|| Signal::new(Theme::default()));

    rsx! {
        document::Title { "{config.document.title}" }
        document::Meta { name: "description", content: "{config.document.description}" }
        document::Link { rel: "canonical", href: "{config.document.canonical_url}" }
        style { "{common::style::PORTFOLIO_STYLES}" }

        div { class: apply_theme_class("portfolio", theme()),
            ScrollProvider {
                NavBar {}
                main { class: "page-main",
                    Hero {}
                    About {}
                    Skills {}
                    Projects {}
                    EducationSection {}
                    Contact {}
                }
                ScrollToTop {}
                Footer {}
            }
        }
    }
}
