pub mod navigation;
pub mod scroll;
pub mod scroll_top;
