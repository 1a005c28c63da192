use tracing::debug;

use crate::section::SectionId;

// the piece of the outside world the navigation controller drives
//
// the web front end implements this over the live document; tests use a recording fake
pub trait Viewport {
    // smooth-scroll the element with this id into view, returning false if there is no
    // such element
    fn scroll_into_view(&self, id: &str) -> bool;
}

// scroll a section into view outside of the navigation bar, logging a section that is
// missing from the page
pub fn reveal_section<V: Viewport + ?Sized>(viewport: &V, section: SectionId) -> bool {
    let found = viewport.scroll_into_view(section.id());
    if !found {
        debug!("section {} is not on the page", section.id());
    }

    found
}

// ui state owned by the navigation bar
//
// the "scrolled" styling and the theme are not in here: the former is a predicate over the
// shared scroll sample (see scroll.rs), the latter is context owned by the page root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // scroll to a section by id or fragment
    //
    // a target that is not on the page is not an error: nothing moves and the menu keeps
    // whatever state it had
    pub fn scroll_to_section<V: Viewport + ?Sized>(&mut self, viewport: &V, target: &str) -> bool {
        let id = target.strip_prefix('#').unwrap_or(target);

        if id.is_empty() || !viewport.scroll_into_view(id) {
            debug!("no scroll target for {target}");
            return false;
        }

        self.menu_open = false;
        true
    }

    pub fn go_to<V: Viewport + ?Sized>(&mut self, viewport: &V, section: SectionId) -> bool {
        self.scroll_to_section(viewport, section.id())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::section::NAV_LINKS;

    // a page that knows about a fixed set of element ids and records every scroll request
    struct FakeViewport {
        ids: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn page() -> Self {
            FakeViewport {
                ids: SectionId::ALL.iter().map(|s| s.id()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.calls.borrow_mut().push(id.to_owned());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn known_section_scrolls_once_and_closes_menu() {
        for section in SectionId::ALL {
            let viewport = FakeViewport::page();
            let mut state = NavState { menu_open: true };

            assert!(state.scroll_to_section(&viewport, &section.href()));
            assert_eq!(viewport.calls(), vec![section.id().to_owned()]);
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn known_section_with_closed_menu_stays_closed() {
        let viewport = FakeViewport::page();
        let mut state = NavState::default();

        assert!(state.go_to(&viewport, SectionId::About));
        assert!(!state.menu_open);
        assert_eq!(viewport.calls().len(), 1);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let viewport = FakeViewport::page();
        let mut state = NavState { menu_open: true };

        assert!(!state.scroll_to_section(&viewport, "#blog"));
        assert!(!state.scroll_to_section(&viewport, "#"));
        assert!(viewport.calls().is_empty());
        assert!(state.menu_open);
    }

    #[test]
    fn menu_toggle_twice_restores_state() {
        for open in [false, true] {
            let mut state = NavState { menu_open: open };

            state.toggle_menu();
            assert_eq!(state.menu_open, !open);
            state.toggle_menu();
            assert_eq!(state.menu_open, open);
        }
    }

    #[test]
    fn projects_link_scrolls_and_closes_open_menu() {
        let viewport = FakeViewport::page();
        let mut state = NavState::default();

        // narrow viewport: open the hamburger menu first
        state.toggle_menu();
        assert!(state.menu_open);

        let link = NAV_LINKS
            .iter()
            .find(|l| l.name == "Projects")
            .expect("projects link");
        assert!(state.scroll_to_section(&viewport, &link.target.href()));

        assert_eq!(viewport.calls(), vec!["projects".to_owned()]);
        assert!(!state.menu_open);
    }

    #[test]
    fn reveal_section_reports_missing_sections() {
        let viewport = FakeViewport::page();
        assert!(reveal_section(&viewport, SectionId::Contact));
        assert_eq!(viewport.calls(), vec!["contact".to_owned()]);

        let empty = FakeViewport {
            ids: Vec::new(),
            calls: RefCell::new(Vec::new()),
        };
        assert!(!reveal_section(&empty, SectionId::Contact));
        assert!(empty.calls().is_empty());
    }
}
