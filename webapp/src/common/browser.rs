use anyhow::Result;
use gloo_timers::callback::Timeout;
use tracing::error;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use portfolio_common::{
    nav::Viewport,
    scroll::{ScrollHost, ScrollSample},
};

// the live document, as seen by the navigation controller
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));

        let Some(element) = element else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);

        true
    }
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        error!("no global window exists");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        error!("no global window exists");
        return;
    };

    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        error!("failed to open {url}: {err:?}");
    }
}

fn read_sample(window: &Window) -> ScrollSample {
    ScrollSample::new(window.scroll_y().unwrap_or(0.0))
}

// the page may be restored halfway down, so this seeds the shared sample
pub fn current_sample() -> ScrollSample {
    web_sys::window()
        .map(|w| read_sample(&w))
        .unwrap_or_default()
}

// the live window, as seen by the scroll subscription
pub struct BrowserScrollHost {
    window: Window,
}

impl BrowserScrollHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;
        Ok(BrowserScrollHost { window })
    }
}

impl ScrollHost for BrowserScrollHost {
    type Listener = Closure<dyn FnMut()>;
    type Timer = Timeout;

    fn scroll_y(&self) -> f64 {
        read_sample(&self.window).y
    }

    fn now_ms(&self) -> Option<f64> {
        self.window.performance().map(|p| p.now())
    }

    fn add_listener(&self, on_scroll: Box<dyn FnMut()>) -> Result<Self::Listener> {
        let callback = Closure::wrap(on_scroll);

        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("failed to add scroll listener: {err:?}")))?;

        Ok(callback)
    }

    fn remove_listener(&self, listener: Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            error!("failed to remove scroll listener: {err:?}");
        }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer {
        Timeout::new(delay_ms, callback)
    }

    fn clear_timeout(&self, timer: Self::Timer) {
        timer.cancel();
    }
}
