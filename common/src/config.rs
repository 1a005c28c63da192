use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

const SITE_TOML: &str = include_str!("../site.toml");

// portfolio configuration
//
// everything about the page owner that the section renderers need, apart from the skill,
// project, and education tables
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub owner: OwnerConfig,
    pub contact: ContactConfig,
    pub document: DocumentConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OwnerConfig {
    pub name: String,
    // used in the footer sign-off
    pub short_name: String,
    pub role: String,
    pub tagline: String,
    pub blurb: String,
    pub availability: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    pub email: String,
    pub github_url: String,
    pub github_handle: String,
    pub linkedin_url: String,
    pub linkedin_handle: String,

    // served alongside the wasm bundle and opened in a new tab
    pub resume_path: String,
}

impl ContactConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DocumentConfig {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.owner.name.trim().is_empty() {
            return Err(anyhow::Error::msg("owner.name must not be empty"));
        }

        if !self.contact.email.contains('@') {
            return Err(anyhow::Error::msg(format!(
                "contact.email {} is not an email address",
                self.contact.email
            )));
        }

        for (key, url) in [
            ("contact.github_url", &self.contact.github_url),
            ("contact.linkedin_url", &self.contact.linkedin_url),
            ("document.canonical_url", &self.document.canonical_url),
        ] {
            if !url.starts_with("https://") {
                return Err(anyhow::Error::msg(format!("{key} must be an https url")));
            }
        }

        if !self.contact.resume_path.starts_with('/') {
            return Err(anyhow::Error::msg("contact.resume_path must be absolute"));
        }

        Ok(())
    }
}

pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    data.config.validate()?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub fn read_config() -> Arc<SiteConfig> {
    debug!("reading embedded site config");

    let config = match parse_config(SITE_TOML) {
        Ok(val) => val,
        Err(err) => panic!("failed to parse site config: {err}"),
    };

    debug!("successfully parsed site config");
    Arc::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = parse_config(SITE_TOML).unwrap();

        assert_eq!(config.owner.name, "Rohit Mohite");
        assert_eq!(config.contact.resume_path, "/rohit_resume.pdf");
        assert_eq!(config.contact.mailto(), "mailto:rohitmohite.in@gmail.com");
        assert!(config.contact.github_url.starts_with("https://github.com/"));
    }

    #[test]
    fn read_config_matches_parse() {
        assert_eq!(*read_config(), parse_config(SITE_TOML).unwrap());
    }

    #[test]
    fn config_outside_of_table_is_rejected() {
        let doc = SITE_TOML.replace("[config.", "[");
        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn bad_values_are_rejected() {
        let doc = SITE_TOML.replace("rohitmohite.in@gmail.com", "nobody");
        assert!(parse_config(&doc).is_err());

        let doc = SITE_TOML.replace("\"/rohit_resume.pdf\"", "\"rohit_resume.pdf\"");
        assert!(parse_config(&doc).is_err());

        let doc = SITE_TOML.replace("https://github.com", "http://github.com");
        assert!(parse_config(&doc).is_err());
    }
}
