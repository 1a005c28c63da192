use anyhow::Result;

mod education;
mod project;
mod skill;

pub use education::{EDUCATION, Education, Score};
pub use project::{PROJECTS, Project, ProjectLinks};
pub use skill::{SKILL_CATEGORIES, SKILLS, Skill, SkillCategory, skills_in};

// the smaller blocks of copy that only one section uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusArea {
    pub label: &'static str,
    pub summary: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        label: "Frontend",
        summary: "React, JavaScript",
        accent: "blue",
    },
    FocusArea {
        label: "Backend",
        summary: "Express",
        accent: "emerald",
    },
    FocusArea {
        label: "Database",
        summary: "SQL, MongoDB",
        accent: "amber",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hello! I'm a passionate Full Stack Developer with a strong foundation in modern web technologies. \
     I specialize in the MERN stack and have hands-on experience with Java, SQL, and Python.",
    "My journey in programming began with curiosity and has evolved into a genuine passion for \
     creating efficient, scalable, and user-friendly applications. I believe in writing clean code, \
     following best practices, and continuously learning new technologies.",
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        value: "2+",
        label: "Projects",
    },
    Stat {
        value: "10+",
        label: "Technologies",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Passion for Coding",
        description: "Love turning complex problems into elegant solutions",
    },
    Highlight {
        title: "Problem Solver",
        description: "Approach challenges with analytical thinking",
    },
    Highlight {
        title: "Modern Tech Enthusiast",
        description: "Stay updated with latest web technologies",
    },
];

// check every table invariant
//
// the tables are compiled in, so this only ever fails after a bad edit; the front end logs
// the failure instead of refusing to render
pub fn validate_tables() -> Result<()> {
    for skill in SKILLS {
        skill.validate()?;
    }

    for project in PROJECTS {
        project.validate()?;
    }

    for entry in EDUCATION {
        entry.validate()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_valid() {
        validate_tables().unwrap();
    }

    #[test]
    fn every_skill_level_is_a_percentage() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn every_category_has_skills() {
        for category in SKILL_CATEGORIES {
            assert!(skills_in(*category).next().is_some(), "{category} is empty");
        }
    }

    #[test]
    fn education_scores_are_exclusive() {
        // the type already rules out "both", so check the table covers both kinds and none
        assert!(matches!(EDUCATION[0].score, Some(Score::Cgpa(_))));
        assert!(
            EDUCATION[1..]
                .iter()
                .all(|e| matches!(e.score, Some(Score::Percentage(_))))
        );
    }
}
