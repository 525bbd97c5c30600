use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::motion::MotionConfig;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Purple,
    Emerald,
    Rose,
    Yellow,
    Blue,
    Green,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub contact: Contact,
    #[serde(default)]
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub tagline: String,
    pub greeting: String,
    pub name_lines: Vec<NameLine>,
    pub description: Vec<Fragment>,
    pub cta_label: String,
    pub cta_target: String,
}

/// One line of the animated name; `start_index` continues the letter stagger
/// from the previous line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameLine {
    pub text: String,
    pub start_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    #[serde(default)]
    pub accent: Option<Accent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub journey: Vec<String>,
    pub skills: Vec<Skill>,
    pub passions: Vec<Passion>,
    pub interests: Vec<Interest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub accent: Accent,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passion {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub category: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub items: Vec<ContactItem>,
    pub socials: Vec<SocialLink>,
    pub github_profile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
    pub icon: String,
    pub accent: Accent,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse(&file.data)
}

fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))?;
    if let Some(skill) = portfolio.about.skills.iter().find(|s| s.level > 100) {
        return Err(ContentError::Invalid(format!(
            "skill {} has level {} (max 100)",
            skill.name, skill.level
        )));
    }
    portfolio
        .motion
        .card_options()
        .map_err(|e| ContentError::Invalid(e.to_string()))?;
    Ok(portfolio)
}

/// The embedded site content, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let p = portfolio().expect("embedded portfolio should parse");
        assert!(!p.projects.is_empty());
        assert!(!p.about.skills.is_empty());
        assert_eq!(p.nav.len(), 3);
        assert!(p.nav.iter().all(|n| n.href.starts_with('#')));
        assert_eq!(p.hero.name_lines.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            parse(b"{ \"owner\": 1 }"),
            Err(ContentError::ParseError(_))
        ));
    }

    #[test]
    fn test_rejects_skill_over_100() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&Assets::get(PORTFOLIO_FILE).unwrap().data).unwrap();
        value["about"]["skills"][0]["level"] = serde_json::json!(101);
        let bytes = serde_json::to_vec(&value).unwrap();
        assert!(matches!(parse(&bytes), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_motion_section_is_optional() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&Assets::get(PORTFOLIO_FILE).unwrap().data).unwrap();
        value.as_object_mut().unwrap().remove("motion");
        let bytes = serde_json::to_vec(&value).unwrap();
        let p = parse(&bytes).unwrap();
        assert_eq!(p.motion, MotionConfig::default());
    }
}
