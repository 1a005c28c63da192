use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::error;

use portfolio_common::{
    SCROLL_THROTTLE_MS,
    scroll::{ScrollSample, ScrollSubscription},
};

use crate::common::browser::{BrowserScrollHost, current_sample};

// owns the page's single scroll subscription
//
// children read the latest sample with use_context::<Signal<ScrollSample>>() and derive their
// own flags from it; the listener is attached on first render and released when this
// component goes away
#[component]
pub fn ScrollProvider(children: Element) -> Element {
    let sample = use_context_provider(|| Signal::new(current_sample()));

    let listener = use_hook(|| {
        let mut sample = sample;
        let attached = BrowserScrollHost::new().and_then(|host| {
            ScrollSubscription::attach(Rc::new(host), SCROLL_THROTTLE_MS, move |s| sample.set(s))
        });

        let listener = match attached {
            Ok(v) => Some(v),
            Err(err) => {
                error!("scroll tracking disabled: {err}");
                None
            }
        };

        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    rsx! {
        {children}
    }
}
