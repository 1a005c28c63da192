pub mod config;
pub mod data;
pub mod nav;
pub mod scroll;
pub mod section;
pub mod theme;

// scroll offsets (in css pixels) that gate the two scroll-derived flags
//
// the navigation bar picks up its "scrolled" styling just below the fold of the header,
// while the back-to-top button waits until the hero is mostly out of view
pub const NAV_THRESHOLD: f64 = 50.0;
pub const TOP_THRESHOLD: f64 = 300.0;

// roughly one sample per frame at 60Hz
pub const SCROLL_THROTTLE_MS: f64 = 16.0;
