//! Record builders shared by unit tests.

use super::{BlogPost, LinkRef, Project, ProjectCategory};

pub fn project(id: &str, category: ProjectCategory) -> Project {
    Project {
        id: id.to_owned(),
        title: format!("Project {id}"),
        description: String::new(),
        github_repo: LinkRef::Private,
        site_url: LinkRef::Private,
        tools_used: Vec::new(),
        image_url: String::new(),
        category,
        featured: false,
        completion_date: time::macros::date!(2024 - 01 - 01),
        challenges: String::new(),
    }
}

pub fn post(id: &str) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: format!("Post {id}"),
        excerpt: String::new(),
        content: String::new(),
        author: "codiac".to_owned(),
        published_date: time::macros::date!(2024 - 01 - 01),
        read_time: "1 min read".to_owned(),
        tags: Vec::new(),
        image_url: String::new(),
        featured: false,
        category: "General".to_owned(),
    }
}
