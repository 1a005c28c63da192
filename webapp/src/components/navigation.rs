use dioxus::prelude::*;
use tracing::debug;

use portfolio_common::{
    nav::NavState,
    scroll::ScrollSample,
    section::{NAV_LINKS, NavLink, SectionId},
    theme::Theme,
};

use crate::common::browser::BrowserViewport;

fn scroll_to(mut nav: Signal<NavState>, section: SectionId) {
    nav.write().go_to(&BrowserViewport, section);
}

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    link: NavLink,
    nav: Signal<NavState>,
    class: String,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let link = props.link;
    let nav = props.nav;

    rsx! {
        a {
            class: props.class,
            href: link.target.href(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll_to(nav, link.target);
            },
            "{link.name}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let sample = use_context::<Signal<ScrollSample>>();
    let mut theme = use_context::<Signal<Theme>>();

    let mut nav = use_signal(NavState::default);
    let scrolled = use_memo(move || sample().nav_scrolled());

    let toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);
        debug!({ theme = ?next }, "theme toggled");
    };

    let menu_open = nav().menu_open;

    rsx! {
        header { class: if scrolled() { "site-header scrolled" } else { "site-header" },
            nav { class: "container", aria_label: "Main navigation",
                div { class: "nav-bar",
                    a {
                        class: "nav-logo",
                        href: SectionId::Hero.href(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            scroll_to(nav, SectionId::Hero);
                        },
                        span { class: "nav-dot" }
                        span { "Portfolio" }
                    }

                    div { class: "nav-links",
                        for link in NAV_LINKS {
                            NavBarLink {
                                key: "{link.name}",
                                link: *link,
                                nav,
                                class: "nav-link".to_owned(),
                            }
                        }
                        button {
                            class: "icon-btn",
                            aria_label: "Toggle dark mode",
                            title: if theme().is_dark() { "Light mode" } else { "Dark mode" },
                            onclick: toggle_theme,
                            if theme().is_dark() { "☀" } else { "☾" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| scroll_to(nav, SectionId::Contact),
                            "Let's Talk"
                        }
                    }

                    button {
                        class: "icon-btn menu-toggle",
                        aria_label: "Toggle menu",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| nav.write().toggle_menu(),
                        if menu_open { "✕" } else { "☰" }
                    }
                }

                if menu_open {
                    div { class: "mobile-menu",
                        for link in NAV_LINKS {
                            NavBarLink {
                                key: "{link.name}",
                                link: *link,
                                nav,
                                class: "nav-link".to_owned(),
                            }
                        }
                        div { class: "separator" }
                        div { class: "mobile-actions",
                            button { class: "btn btn-outline btn-block", onclick: toggle_theme,
                                if theme().is_dark() { "☀ " } else { "☾ " }
                                "{theme().toggle_label()}"
                            }
                            button {
                                class: "btn btn-primary btn-block",
                                onclick: move |_| {
                                    scroll_to(nav, SectionId::Contact);
                                    nav.write().menu_open = false;
                                },
                                "Let's Talk"
                            }
                        }
                    }
                }
            }
        }
    }
}
