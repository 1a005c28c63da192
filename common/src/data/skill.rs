use std::fmt;

use anyhow::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Languages,
    Tools,
}

impl SkillCategory {
    // colour family used for the category's icon and progress bars
    pub fn accent(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "blue",
            SkillCategory::Backend => "emerald",
            SkillCategory::Languages => "amber",
            SkillCategory::Tools => "violet",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// display order of the skill cards
pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Frontend,
    SkillCategory::Backend,
    SkillCategory::Languages,
    SkillCategory::Tools,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    // 0-100, only ever used as a progress bar width
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow::Error::msg("skill with an empty name"));
        }

        if self.level > 100 {
            return Err(anyhow::Error::msg(format!(
                "skill {} has level {} outside of 0-100",
                self.name, self.level
            )));
        }

        Ok(())
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%;", self.level.min(100))
    }
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("React", 85, SkillCategory::Frontend),
    skill("Tailwind CSS", 80, SkillCategory::Frontend),
    skill("HTML5", 90, SkillCategory::Frontend),
    skill("JavaScript", 85, SkillCategory::Frontend),
    skill("Express", 70, SkillCategory::Backend),
    skill("Node.js", 75, SkillCategory::Backend),
    skill("MongoDB", 75, SkillCategory::Backend),
    skill("Java", 70, SkillCategory::Languages),
    skill("Python", 65, SkillCategory::Languages),
    skill("SQL", 75, SkillCategory::Languages),
    skill("Git", 80, SkillCategory::Tools),
    skill("VS Code", 90, SkillCategory::Tools),
    skill("PyCharm", 75, SkillCategory::Tools),
];

// skills of one category, in table order
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_preserves_table_order() {
        let frontend: Vec<&str> = skills_in(SkillCategory::Frontend).map(|s| s.name).collect();
        assert_eq!(frontend, ["React", "Tailwind CSS", "HTML5", "JavaScript"]);

        let tools: Vec<&str> = skills_in(SkillCategory::Tools).map(|s| s.name).collect();
        assert_eq!(tools, ["Git", "VS Code", "PyCharm"]);
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let bad = skill("Rust", 101, SkillCategory::Languages);
        assert!(bad.validate().is_err());

        let edge = skill("Rust", 100, SkillCategory::Languages);
        assert!(edge.validate().is_ok());
        assert!(skill("Rust", 0, SkillCategory::Languages).validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(skill("  ", 50, SkillCategory::Tools).validate().is_err());
    }

    #[test]
    fn width_matches_level() {
        assert_eq!(SKILLS[0].width_style(), "width: 85%;");
    }

    #[test]
    fn every_skill_belongs_to_a_listed_category() {
        let covered: usize = SKILL_CATEGORIES.iter().map(|c| skills_in(*c).count()).sum();
        assert_eq!(covered, SKILLS.len());
    }
}
