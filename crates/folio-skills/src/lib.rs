//! The portfolio's skills table.
//!
//! Read-only, ordered data consumed by the presentation layer.

mod data;

use ratatui::style::Color;
use serde::Serialize;

pub use data::SKILL_CATEGORIES;

/// Icon shown next to a category or skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Server,
    Wrench,
    Palette,
    React,
    TypeScript,
    JavaScript,
    Html,
    Css,
    Tailwind,
    ThreeJs,
    NodeJs,
    Rust,
    Python,
    Database,
    Git,
    Docker,
    Figma,
    Terminal,
    Cloud,
}

impl Icon {
    /// Terminal glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Server => "▤",
            Icon::Wrench => "⚒",
            Icon::Palette => "◐",
            Icon::React => "⚛",
            Icon::TypeScript => "TS",
            Icon::JavaScript => "JS",
            Icon::Html => "◇",
            Icon::Css => "◆",
            Icon::Tailwind => "≋",
            Icon::ThreeJs => "△",
            Icon::NodeJs => "⬢",
            Icon::Rust => "⚙",
            Icon::Python => "λ",
            Icon::Database => "⛁",
            Icon::Git => "⎇",
            Icon::Docker => "▣",
            Icon::Figma => "✎",
            Icon::Terminal => ">_",
            Icon::Cloud => "☁",
        }
    }
}

/// A single skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: Icon,
    /// Display color as `#rrggbb`.
    pub color: &'static str,
    /// Experience label, e.g. "3+ years".
    pub experience: &'static str,
    pub description: &'static str,
}

impl Skill {
    /// Display color, or `None` if the color string is malformed.
    pub fn color(&self) -> Option<Color> {
        self.color.parse().ok()
    }

    /// Level as a ratio in [0, 1].
    pub fn ratio(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}

/// A group of related skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    /// Mean skill level, rounded down.
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        (total / self.skills.len() as u32) as u8
    }
}

/// All categories in display order.
pub fn categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES
}

/// Look up a category by id.
pub fn category(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.id == id)
}

/// Find a skill by name (case-insensitive) along with its category.
pub fn find_skill(name: &str) -> Option<(&'static SkillCategory, &'static Skill)> {
    SKILL_CATEGORIES.iter().find_map(|category| {
        category
            .skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|skill| (category, skill))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_skills() {
        assert!(!categories().is_empty());
        for category in categories() {
            assert!(!category.skills.is_empty(), "{} has no skills", category.id);
        }
    }

    #[test]
    fn test_levels_within_range() {
        for skill in categories().iter().flat_map(|c| c.skills) {
            assert!(skill.level <= 100, "{} level {}", skill.name, skill.level);
        }
    }

    #[test]
    fn test_colors_parse() {
        for skill in categories().iter().flat_map(|c| c.skills) {
            assert!(skill.color().is_some(), "{} color {}", skill.name, skill.color);
        }
    }

    #[test]
    fn test_category_ids_unique() {
        let ids: HashSet<_> = categories().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), categories().len());
    }

    #[test]
    fn test_skill_names_unique() {
        let skills: Vec<_> = categories().iter().flat_map(|c| c.skills).collect();
        let names: HashSet<_> = skills.iter().map(|s| s.name.to_ascii_lowercase()).collect();
        assert_eq!(names.len(), skills.len());
    }

    #[test]
    fn test_hex_color() {
        let (_, react) = find_skill("react").unwrap();
        assert_eq!(react.color(), Some(Color::Rgb(0x61, 0xda, 0xfb)));

        let broken = Skill {
            color: "#61daf",
            ..*react
        };
        assert_eq!(broken.color(), None);
    }

    #[test]
    fn test_lookup() {
        let frontend = category("frontend").unwrap();
        assert_eq!(frontend.title, "Frontend");
        assert!(category("nope").is_none());

        let (owner, skill) = find_skill("typescript").unwrap();
        assert_eq!(owner.id, "frontend");
        assert_eq!(skill.name, "TypeScript");
    }

    #[test]
    fn test_average_level() {
        const SKILLS: &[Skill] = &[
            Skill {
                name: "a",
                level: 50,
                icon: Icon::Code,
                color: "#000000",
                experience: "",
                description: "",
            },
            Skill {
                name: "b",
                level: 91,
                icon: Icon::Code,
                color: "#000000",
                experience: "",
                description: "",
            },
        ];
        let category = SkillCategory {
            id: "t",
            title: "T",
            icon: Icon::Code,
            description: "",
            skills: SKILLS,
        };
        assert_eq!(category.average_level(), 70);
        assert_eq!(SKILLS[1].ratio(), 0.91);
    }
}
