//! Read-only portfolio content.
//!
//! DESIGN
//! ======
//! Projects and blog posts ship as JSON documents embedded at build time;
//! testimonials, skills and profile text are Rust constants in [`catalog`].
//! The repository is parsed once by the root component and shared through
//! context. Nothing mutates it afterwards.
//!
//! ERROR HANDLING
//! ==============
//! Parsing is strict: an unknown category bucket, a record whose declared
//! category disagrees with its bucket, or a duplicate id is rejected so the
//! gallery filter can rely on `Project::category` alone.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod catalog;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod types;

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

pub use types::{BlogPost, LinkRef, Project, ProjectCategory, Skill, SkillIcon, Testimonial};

const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const BLOGS_JSON: &str = include_str!("../../data/blogs.json");

/// Number of posts shown in the blog section.
pub const BLOG_LIST_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown project category bucket: {0}")]
    UnknownCategory(String),
    #[error("project {id} is listed under {} but declares {}", .bucket.key(), .declared.key())]
    CategoryMismatch { id: String, bucket: ProjectCategory, declared: ProjectCategory },
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Deserialize)]
struct BlogsDocument {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

/// Projects (in gallery order) and blog posts (in publication-list order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentRepository {
    projects: Vec<Project>,
    posts: Vec<BlogPost>,
}

impl ContentRepository {
    /// Parse the documents bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if either embedded document is malformed.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(PROJECTS_JSON, BLOGS_JSON)
    }

    /// Parse a projects document (object keyed by category) and a blogs
    /// document (`{ "posts": [...] }`).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] on malformed JSON, unknown category buckets,
    /// bucket/category mismatches and duplicate ids.
    pub fn from_json(projects_json: &str, blogs_json: &str) -> Result<Self, ContentError> {
        let projects = parse_projects(projects_json)?;
        let blogs: BlogsDocument = serde_json::from_str(blogs_json)
            .map_err(|source| ContentError::Parse { document: "blogs.json", source })?;
        ensure_unique("blog post", blogs.posts.iter().map(|p| p.id.as_str()))?;

        log::debug!("content loaded: {} projects, {} posts", projects.len(), blogs.posts.len());
        Ok(Self { projects, posts: blogs.posts })
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Posts shown in the blog section (the first [`BLOG_LIST_LEN`]).
    #[must_use]
    pub fn recent_posts(&self) -> &[BlogPost] {
        &self.posts[..self.posts.len().min(BLOG_LIST_LEN)]
    }
}

/// Flatten the category-keyed document into frontend, backend, mobile,
/// fullstack order.
fn parse_projects(raw: &str) -> Result<Vec<Project>, ContentError> {
    let mut buckets: BTreeMap<String, Vec<Project>> =
        serde_json::from_str(raw).map_err(|source| ContentError::Parse { document: "projects.json", source })?;

    if let Some(unknown) = buckets.keys().find(|k| ProjectCategory::from_key(k).is_none()) {
        return Err(ContentError::UnknownCategory(unknown.clone()));
    }

    let mut projects = Vec::new();
    for bucket in ProjectCategory::ALL {
        for project in buckets.remove(bucket.key()).unwrap_or_default() {
            if project.category != bucket {
                return Err(ContentError::CategoryMismatch { id: project.id, bucket, declared: project.category });
            }
            projects.push(project);
        }
    }
    ensure_unique("project", projects.iter().map(|p| p.id.as_str()))?;
    Ok(projects)
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { kind, id: id.to_owned() });
        }
    }
    Ok(())
}
