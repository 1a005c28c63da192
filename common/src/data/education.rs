use anyhow::Result;

// an education entry reports at most one kind of score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Score {
    Cgpa(&'static str),
    Percentage(&'static str),
}

impl Score {
    pub fn value(self) -> &'static str {
        match self {
            Score::Cgpa(v) | Score::Percentage(v) => v,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::Cgpa(_) => "CGPA",
            Score::Percentage(_) => "Percentage",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
    pub score: Option<Score>,
}

impl Education {
    pub fn validate(&self) -> Result<()> {
        if self.degree.trim().is_empty() {
            return Err(anyhow::Error::msg("education entry with an empty degree"));
        }

        if let Some(score) = self.score {
            if score.value().trim().is_empty() {
                return Err(anyhow::Error::msg(format!(
                    "{} for {} is present but empty",
                    score.label(),
                    self.degree
                )));
            }
        }

        Ok(())
    }
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.E. in Computer Engineering",
        institution: "SPPU Pune",
        years: "2021-2025",
        score: Some(Score::Cgpa("7.82")),
    },
    Education {
        degree: "Higher Secondary Certificate (HSC)",
        institution: "Vyankatrao High School and Junior College",
        years: "2019-2021",
        score: Some(Score::Percentage("86.17%")),
    },
    Education {
        degree: "Secondary School Certificate (SSC)",
        institution: "Jawahar Navodaya Vidyalaya Palus, Sangli",
        years: "2014-2019",
        score: Some(Score::Percentage("88.80%")),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_labels() {
        assert_eq!(Score::Cgpa("7.82").label(), "CGPA");
        assert_eq!(Score::Percentage("86.17%").label(), "Percentage");
        assert_eq!(Score::Percentage("86.17%").value(), "86.17%");
    }

    #[test]
    fn missing_score_is_valid() {
        let entry = Education {
            score: None,
            ..EDUCATION[0]
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn blank_score_is_rejected() {
        let entry = Education {
            score: Some(Score::Cgpa(" ")),
            ..EDUCATION[0]
        };
        assert!(entry.validate().is_err());
    }
}
