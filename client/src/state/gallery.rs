//! Project gallery filter.
//!
//! DESIGN
//! ======
//! The filter is a closed enum so an out-of-range category cannot be stored.
//! Raw values coming from outside (query strings, DOM data attributes) go
//! through [`CategoryFilter::parse`], which falls back to `All`.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::content::{Project, ProjectCategory};

/// Active subset selector for the project gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Only(ProjectCategory::Frontend),
        Self::Only(ProjectCategory::Backend),
        Self::Only(ProjectCategory::Mobile),
        Self::Only(ProjectCategory::Fullstack),
    ];

    /// Parse a filter id. Unknown values fall back to `All`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim();
        if key == "all" {
            return Self::All;
        }
        match ProjectCategory::from_key(key) {
            Some(category) => Self::Only(category),
            None => {
                log::warn!("unknown project category {key:?}; showing all projects");
                Self::All
            }
        }
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.key(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(ProjectCategory::Frontend) => "Frontend",
            Self::Only(ProjectCategory::Backend) => "Backend",
            Self::Only(ProjectCategory::Mobile) => "Mobile",
            Self::Only(ProjectCategory::Fullstack) => "Full Stack",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::All | Self::Only(ProjectCategory::Fullstack) => "🌐",
            Self::Only(ProjectCategory::Frontend) => "</>",
            Self::Only(ProjectCategory::Backend) => "🖥",
            Self::Only(ProjectCategory::Mobile) => "📱",
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

/// Projects visible under `filter`, in source order. Borrows from `all`.
#[must_use]
pub fn visible_projects(all: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    all.iter().filter(|p| filter.matches(p)).collect()
}
