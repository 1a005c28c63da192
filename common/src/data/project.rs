use anyhow::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub source: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
    pub links: Option<ProjectLinks>,
}

impl Project {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(anyhow::Error::msg("project with an empty title"));
        }

        Ok(())
    }

    pub fn source(&self) -> Option<&'static str> {
        self.links.and_then(|l| l.source)
    }

    pub fn demo(&self) -> Option<&'static str> {
        self.links.and_then(|l| l.demo)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Fit Sphere",
        description: "A comprehensive fitness recommendation application that provides personalized \
                      workout plans and exercise tracking.",
        tech_stack: &["React", "Tailwind CSS", "HTML5", "JavaScript"],
        features: &[
            "Dynamic workout plan generation",
            "Responsive and intuitive UI",
            "Sets and reps tracking system",
            "Personalized exercise recommendations",
        ],
        links: Some(ProjectLinks {
            demo: Some("#"),
            source: Some("#"),
        }),
    },
    Project {
        title: "Quick Scribe",
        description: "An innovative audio transcription and translation application that converts \
                      speech to text with real-time processing.",
        tech_stack: &["React", "JavaScript", "HTML5", "CSS3"],
        features: &[
            "Audio upload and playback functionality",
            "Real-time speech-to-text transcription",
            "Multi-language translation support",
            "Responsive and accessible design",
        ],
        links: Some(ProjectLinks {
            demo: Some("#"),
            source: Some("#"),
        }),
    },
    Project {
        title: "More Projects Coming Soon",
        description: "Currently working on exciting new projects. Stay tuned for updates!",
        tech_stack: &[],
        features: &[],
        links: Some(ProjectLinks {
            demo: None,
            source: Some("#"),
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_accessors() {
        let placeholder = &PROJECTS[2];
        assert_eq!(placeholder.source(), Some("#"));
        assert_eq!(placeholder.demo(), None);

        let bare = Project {
            links: None,
            ..*placeholder
        };
        assert_eq!(bare.source(), None);
    }

    #[test]
    fn empty_title_is_rejected() {
        let bad = Project {
            title: "",
            ..PROJECTS[0]
        };
        assert!(bad.validate().is_err());
    }
}
