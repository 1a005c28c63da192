use dioxus::prelude::*;

use portfolio_common::scroll::ScrollSample;

use crate::common::browser::scroll_to_top;

#[component]
pub fn ScrollToTop() -> Element {
    let sample = use_context::<Signal<ScrollSample>>();
    let visible = use_memo(move || sample().show_scroll_top());

    rsx! {
        if visible() {
            button {
                class: "scroll-top",
                aria_label: "Scroll to top",
                title: "Back to top",
                onclick: move |_| scroll_to_top(),
                "↑"
            }
        }
    }
}
