// SPDX-License-Identifier: MPL-2.0
//! Portfolio content model.
//!
//! The page renders whatever a [`Profile`] describes: the owner's name and
//! tagline, the list of skills with proficiency percentages, and the contact
//! section copy. A built-in profile is used unless the configuration points
//! at a `profile.toml` override.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single skill shown as a progress bar in the skills section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Target fill percentage, 0-100. Out-of-range values are clamped on load.
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(100),
        }
    }
}

/// Everything the portfolio page displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default = "default_contact_intro")]
    pub contact_intro: String,
}

fn default_contact_intro() -> String {
    "Have a project in mind? Send me a message.".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            tagline: "Full-stack web developer".to_string(),
            about: "I build fast, accessible web applications and enjoy turning \
                    rough ideas into polished products. Away from the keyboard I \
                    hike, take photos, and over-engineer my coffee setup."
                .to_string(),
            skills: vec![
                Skill::new("HTML & CSS", 95),
                Skill::new("JavaScript", 90),
                Skill::new("React", 85),
                Skill::new("Node.js", 80),
                Skill::new("Python", 75),
                Skill::new("SQL", 70),
            ],
            contact_intro: default_contact_intro(),
        }
    }
}

impl Profile {
    /// Clamps all skill levels into the 0-100 range.
    fn sanitize(mut self) -> Self {
        for skill in &mut self.skills {
            skill.level = skill.level.min(100);
        }
        self
    }
}

/// Loads a profile from a TOML file.
///
/// Unlike the settings file, an unreadable or malformed profile is reported
/// as an error; the caller decides whether to fall back to the built-in one.
pub fn load_from_path(path: &Path) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile =
        toml::from_str(&content).map_err(|e| Error::Profile(e.to_string()))?;
    Ok(profile.sanitize())
}
