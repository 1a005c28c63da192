use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use anyhow::Result;
use tracing::debug;

use crate::{NAV_THRESHOLD, TOP_THRESHOLD};

// a single reading of the viewport's vertical scroll offset
//
// every piece of scroll-derived ui state is a pure predicate over the latest sample, so
// none of it needs a live viewport to be exercised
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub y: f64,
}

impl ScrollSample {
    pub fn new(y: f64) -> Self {
        ScrollSample { y }
    }

    // strictly greater: sitting exactly on the threshold does not count
    pub fn past(&self, threshold: f64) -> bool {
        self.y > threshold
    }

    pub fn nav_scrolled(&self) -> bool {
        self.past(NAV_THRESHOLD)
    }

    pub fn show_scroll_top(&self) -> bool {
        self.past(TOP_THRESHOLD)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleDecision {
    // publish the sample now
    Emit,
    // drop this sample, but make sure a trailing sample is taken after this many ms
    Defer(f64),
}

// leading-edge throttle with a trailing sample
//
// the caller owns the clock; this only decides.  the first offer always emits, any offer
// inside the interval is deferred until the interval has elapsed since the last emission.
// the caller is expected to schedule at most one trailing sample per deferral window and
// report it back through emitted()
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_emit: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Throttle {
            interval_ms: interval_ms.max(0.0),
            last_emit: None,
        }
    }

    pub fn offer(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.last_emit {
            Some(last) if now_ms - last < self.interval_ms => {
                ThrottleDecision::Defer(self.interval_ms - (now_ms - last))
            }
            _ => {
                self.last_emit = Some(now_ms);
                ThrottleDecision::Emit
            }
        }
    }

    // record a trailing emission performed outside of offer()
    pub fn emitted(&mut self, now_ms: f64) {
        self.last_emit = Some(now_ms);
    }
}

// the browser facilities a scroll subscription needs
//
// the web front end implements this over the window; tests drive a fake host by hand
pub trait ScrollHost {
    type Listener: 'static;
    type Timer: 'static;

    fn scroll_y(&self) -> f64;

    // a monotonic clock in ms, if the host has one
    fn now_ms(&self) -> Option<f64>;

    fn add_listener(&self, on_scroll: Box<dyn FnMut()>) -> Result<Self::Listener>;

    fn remove_listener(&self, listener: Self::Listener);

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;

    // must be harmless for a timer that already fired
    fn clear_timeout(&self, timer: Self::Timer);
}

// the page's single scroll listener
//
// each scroll event is pushed through a throttle and whatever gets through is handed to the
// publish callback.  a deferred event schedules one trailing read so that the resting
// position always lands, even if the last event was throttled.
//
// the listener lives exactly as long as this guard: dropping it removes the listener and
// cancels a trailing read that has not fired yet
pub struct ScrollSubscription<H: ScrollHost + 'static> {
    host: Rc<H>,
    listener: Option<H::Listener>,
    trailing: Rc<RefCell<Option<H::Timer>>>,
}

impl<H: ScrollHost + 'static> ScrollSubscription<H> {
    // the publisher is assumed to already hold the current position, so the first event
    // inside the interval is deferred rather than emitted
    pub fn attach<F>(host: Rc<H>, interval_ms: f64, publish: F) -> Result<Self>
    where
        F: FnMut(ScrollSample) + 'static,
    {
        let publish = Rc::new(RefCell::new(publish));
        let throttle = Rc::new(RefCell::new(Throttle::new(interval_ms)));
        let trailing: Rc<RefCell<Option<H::Timer>>> = Rc::new(RefCell::new(None));
        let scheduled = Rc::new(Cell::new(false));

        if let Some(t) = host.now_ms() {
            throttle.borrow_mut().emitted(t);
        }

        let on_scroll = {
            let weak: Weak<H> = Rc::downgrade(&host);
            let trailing = trailing.clone();

            move || {
                let Some(host) = weak.upgrade() else {
                    return;
                };

                let Some(t) = host.now_ms() else {
                    (publish.borrow_mut())(ScrollSample::new(host.scroll_y()));
                    return;
                };

                let decision = throttle.borrow_mut().offer(t);

                match decision {
                    ThrottleDecision::Emit => {
                        (publish.borrow_mut())(ScrollSample::new(host.scroll_y()));
                    }
                    ThrottleDecision::Defer(_) if scheduled.get() => {}
                    ThrottleDecision::Defer(delay) => {
                        scheduled.set(true);

                        let weak = Rc::downgrade(&host);
                        let throttle = throttle.clone();
                        let scheduled = scheduled.clone();
                        let publish = publish.clone();

                        let timer = host.set_timeout(
                            delay.ceil() as u32,
                            Box::new(move || {
                                scheduled.set(false);

                                let Some(host) = weak.upgrade() else {
                                    return;
                                };

                                if let Some(t) = host.now_ms() {
                                    throttle.borrow_mut().emitted(t);
                                }
                                (publish.borrow_mut())(ScrollSample::new(host.scroll_y()));
                            }),
                        );

                        // replacing the slot releases the previous, already fired, timer
                        if let Some(old) = trailing.borrow_mut().replace(timer) {
                            host.clear_timeout(old);
                        }
                    }
                }
            }
        };

        let listener = host.add_listener(Box::new(on_scroll))?;
        debug!("scroll listener attached");

        Ok(ScrollSubscription {
            host,
            listener: Some(listener),
            trailing,
        })
    }
}

impl<H: ScrollHost + 'static> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.remove_listener(listener);
        }

        if let Some(timer) = self.trailing.borrow_mut().take() {
            self.host.clear_timeout(timer);
        }

        debug!("scroll listener removed");
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;

    // a host whose clock, scroll offset, listeners, and timers are all driven by the test
    #[derive(Default)]
    struct FakeHost {
        y: Cell<f64>,
        now: Cell<f64>,
        next_id: Cell<u32>,
        fail_add: bool,
        listeners: RefCell<Vec<(u32, Box<dyn FnMut()>)>>,
        timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
        added: Cell<u32>,
        removed: Cell<u32>,
        cancelled: Cell<u32>,
    }

    impl FakeHost {
        fn id(&self) -> u32 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        }

        fn scroll(&self, now: f64, y: f64) {
            self.now.set(now);
            self.y.set(y);
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener();
            }
        }

        fn fire_timers(&self, now: f64) {
            self.now.set(now);
            let due = std::mem::take(&mut *self.timers.borrow_mut());
            for (_, callback) in due {
                callback();
            }
        }
    }

    impl ScrollHost for FakeHost {
        type Listener = u32;
        type Timer = u32;

        fn scroll_y(&self) -> f64 {
            self.y.get()
        }

        fn now_ms(&self) -> Option<f64> {
            Some(self.now.get())
        }

        fn add_listener(&self, on_scroll: Box<dyn FnMut()>) -> Result<u32> {
            if self.fail_add {
                bail!("no window");
            }

            let id = self.id();
            self.listeners.borrow_mut().push((id, on_scroll));
            self.added.set(self.added.get() + 1);
            Ok(id)
        }

        fn remove_listener(&self, listener: u32) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != listener);
            self.removed.set(self.removed.get() + 1);
        }

        fn set_timeout(&self, _delay_ms: u32, callback: Box<dyn FnOnce()>) -> u32 {
            let id = self.id();
            self.timers.borrow_mut().push((id, callback));
            id
        }

        fn clear_timeout(&self, timer: u32) {
            let mut timers = self.timers.borrow_mut();
            let before = timers.len();
            timers.retain(|(id, _)| *id != timer);
            if timers.len() < before {
                self.cancelled.set(self.cancelled.get() + 1);
            }
        }
    }

    fn subscribe(host: &Rc<FakeHost>) -> (ScrollSubscription<FakeHost>, Rc<RefCell<Vec<f64>>>) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        let subscription = ScrollSubscription::attach(host.clone(), 16.0, move |sample| {
            sink.borrow_mut().push(sample.y)
        })
        .expect("fake host accepts listeners");

        (subscription, published)
    }

    #[test]
    fn nav_flag_boundary() {
        assert!(!ScrollSample::new(0.0).nav_scrolled());
        assert!(!ScrollSample::new(50.0).nav_scrolled());
        assert!(ScrollSample::new(51.0).nav_scrolled());
        assert!(ScrollSample::new(50.5).nav_scrolled());
    }

    #[test]
    fn scroll_top_boundary() {
        assert!(!ScrollSample::new(300.0).show_scroll_top());
        assert!(ScrollSample::new(301.0).show_scroll_top());
    }

    #[test]
    fn flags_are_independent() {
        for y in [0.0, 25.0, 50.0, 51.0, 120.0, 299.0, 300.0, 301.0, 5000.0] {
            let sample = ScrollSample::new(y);
            assert_eq!(sample.nav_scrolled(), y > 50.0, "nav flag at {y}");
            assert_eq!(sample.show_scroll_top(), y > 300.0, "scroll-top flag at {y}");
        }

        // between the two thresholds only the nav flag is up
        let middle = ScrollSample::new(200.0);
        assert!(middle.nav_scrolled());
        assert!(!middle.show_scroll_top());
    }

    #[test]
    fn throttle_emits_first_sample() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.offer(1000.0), ThrottleDecision::Emit);
    }

    #[test]
    fn throttle_defers_inside_interval() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.offer(1000.0), ThrottleDecision::Emit);
        assert_eq!(throttle.offer(1006.0), ThrottleDecision::Defer(10.0));
        assert_eq!(throttle.offer(1015.0), ThrottleDecision::Defer(1.0));
        assert_eq!(throttle.offer(1016.0), ThrottleDecision::Emit);
    }

    #[test]
    fn trailing_emission_restarts_window() {
        let mut throttle = Throttle::new(16.0);
        throttle.offer(0.0);
        assert_eq!(throttle.offer(8.0), ThrottleDecision::Defer(8.0));

        throttle.emitted(16.0);
        assert_eq!(throttle.offer(20.0), ThrottleDecision::Defer(12.0));
        assert_eq!(throttle.offer(32.0), ThrottleDecision::Emit);
    }

    #[test]
    fn zero_interval_never_defers() {
        let mut throttle = Throttle::new(0.0);
        for t in [0.0, 0.0, 1.0, 1.0] {
            assert_eq!(throttle.offer(t), ThrottleDecision::Emit);
        }
    }

    #[test]
    fn subscription_holds_exactly_one_listener() {
        let host = Rc::new(FakeHost::default());
        let (subscription, _) = subscribe(&host);

        assert_eq!(host.added.get(), 1);
        assert_eq!(host.listeners.borrow().len(), 1);
        assert_eq!(host.removed.get(), 0);

        drop(subscription);

        assert_eq!(host.added.get(), 1);
        assert_eq!(host.removed.get(), 1);
        assert!(host.listeners.borrow().is_empty());
    }

    #[test]
    fn throttled_events_land_on_the_resting_position() {
        let host = Rc::new(FakeHost::default());
        let (_subscription, published) = subscribe(&host);

        host.scroll(20.0, 100.0);
        host.scroll(25.0, 150.0);
        host.scroll(28.0, 180.0);

        // one trailing read for the whole burst
        assert_eq!(*published.borrow(), vec![100.0]);
        assert_eq!(host.timers.borrow().len(), 1);

        host.fire_timers(36.0);
        assert_eq!(*published.borrow(), vec![100.0, 180.0]);

        // the trailing read restarted the window
        host.scroll(40.0, 200.0);
        assert_eq!(published.borrow().len(), 2);
        assert_eq!(host.timers.borrow().len(), 1);
    }

    #[test]
    fn drop_cancels_pending_trailing_read() {
        let host = Rc::new(FakeHost::default());
        let (subscription, published) = subscribe(&host);

        host.scroll(5.0, 400.0);
        assert_eq!(host.timers.borrow().len(), 1);

        drop(subscription);

        assert_eq!(host.cancelled.get(), 1);
        assert!(host.timers.borrow().is_empty());

        host.fire_timers(100.0);
        host.scroll(120.0, 500.0);
        assert!(published.borrow().is_empty());
    }

    #[test]
    fn failed_attach_leaves_no_listener() {
        let host = Rc::new(FakeHost {
            fail_add: true,
            ..FakeHost::default()
        });

        let result = ScrollSubscription::attach(host.clone(), 16.0, |_| {});

        assert!(result.is_err());
        assert_eq!(host.added.get(), 0);
        assert!(host.listeners.borrow().is_empty());
    }
}
