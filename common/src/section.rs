// the page fragments that can be scrolled to, in page order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    // the element id, without the leading '#'
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: SectionId,
}

// the hero is reachable through the logo, so it has no entry here
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", target: SectionId::About },
    NavLink { name: "Skills", target: SectionId::Skills },
    NavLink { name: "Projects", target: SectionId::Projects },
    NavLink { name: "Education", target: SectionId::Education },
    NavLink { name: "Contact", target: SectionId::Contact },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn hrefs_are_fragments_of_unique_ids() {
        let ids: HashSet<&str> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());

        assert_eq!(SectionId::Projects.href(), "#projects");
        for section in SectionId::ALL {
            assert_eq!(section.href().strip_prefix('#'), Some(section.id()));
        }
    }

    #[test]
    fn nav_links_follow_page_order() {
        let order: Vec<SectionId> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(order, SectionId::ALL[1..].to_vec());
    }
}
