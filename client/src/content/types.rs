//! Portfolio record types as they appear in the embedded JSON documents.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Value used in the content documents for a link that must not be shown.
pub const PRIVATE_LINK: &str = "private";

/// Fixed set of project categories. Every project belongs to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Mobile,
    Fullstack,
}

impl ProjectCategory {
    /// All categories in gallery order.
    pub const ALL: [Self; 4] = [Self::Frontend, Self::Backend, Self::Mobile, Self::Fullstack];

    /// Stable lowercase key used in the content documents.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Mobile => "mobile",
            Self::Fullstack => "fullstack",
        }
    }

    #[must_use]
    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == raw)
    }
}

/// A repository or live-site reference. The `"private"` sentinel (and an
/// empty string) hide the corresponding button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkRef {
    Public(String),
    Private,
}

impl LinkRef {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Public(url) => Some(url),
            Self::Private => None,
        }
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

impl From<String> for LinkRef {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(PRIVATE_LINK) {
            Self::Private
        } else {
            Self::Public(trimmed.to_owned())
        }
    }
}

impl From<LinkRef> for String {
    fn from(link: LinkRef) -> Self {
        match link {
            LinkRef::Public(url) => url,
            LinkRef::Private => PRIVATE_LINK.to_owned(),
        }
    }
}

/// A showcased project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub github_repo: LinkRef,
    pub site_url: LinkRef,
    #[serde(default)]
    pub tools_used: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    #[serde(with = "iso_date")]
    pub completion_date: Date,
    #[serde(default)]
    pub challenges: String,
}

/// A blog post. `content` is markdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(with = "iso_date")]
    pub published_date: Date,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
    pub category: String,
}

/// A client quote. Defined at compile time in [`super::catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    /// 1–5; out-of-range values are clamped when rendered.
    pub rating: u8,
    pub avatar: &'static str,
}

/// Icon shown next to a skill name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Mobile,
    Globe,
    Server,
    Database,
}

impl SkillIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Mobile => "📱",
            Self::Globe => "🌐",
            Self::Server => "🖥",
            Self::Database => "🛢",
        }
    }
}

/// A skill with a 0–100 proficiency level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
    pub icon: SkillIcon,
}
