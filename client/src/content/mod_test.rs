use super::*;

fn project_json(id: &str, category: &str) -> String {
    format!(
        r#"{{"id":"{id}","title":"P{id}","description":"d","githubRepo":"private","siteUrl":"private",
            "category":"{category}","completionDate":"2024-01-01"}}"#
    )
}

fn post_json(id: &str) -> String {
    format!(
        r#"{{"id":"{id}","title":"T{id}","excerpt":"e","content":"c","author":"a",
            "publishedDate":"2024-01-01","readTime":"1 min read","category":"General"}}"#
    )
}

fn blogs_doc(ids: &[&str]) -> String {
    let posts = ids.iter().map(|id| post_json(id)).collect::<Vec<_>>().join(",");
    format!(r#"{{"posts":[{posts}]}}"#)
}

// =============================================================
// Embedded documents
// =============================================================

#[test]
fn embedded_content_parses() {
    let repo = ContentRepository::embedded().expect("embedded content should parse");
    assert!(!repo.projects().is_empty());
    assert!(!repo.blog_posts().is_empty());
}

#[test]
fn embedded_projects_follow_category_order() {
    let repo = ContentRepository::embedded().unwrap();
    let order = repo
        .projects()
        .iter()
        .map(|p| ProjectCategory::ALL.iter().position(|c| *c == p.category).unwrap())
        .collect::<Vec<_>>();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn embedded_recent_posts_capped() {
    let repo = ContentRepository::embedded().unwrap();
    assert!(repo.recent_posts().len() <= BLOG_LIST_LEN);
    assert_eq!(repo.recent_posts().first(), repo.blog_posts().first());
}

// =============================================================
// Project document parsing
// =============================================================

#[test]
fn projects_are_concatenated_in_category_order() {
    // Keys deliberately out of order in the document.
    let projects = format!(
        r#"{{"fullstack":[{}],"frontend":[{}],"backend":[{}]}}"#,
        project_json("f", "fullstack"),
        project_json("a", "frontend"),
        project_json("b", "backend"),
    );
    let repo = ContentRepository::from_json(&projects, &blogs_doc(&[])).unwrap();
    let ids = repo.projects().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "b", "f"]);
}

#[test]
fn missing_bucket_means_no_projects() {
    let projects = format!(r#"{{"mobile":[{}]}}"#, project_json("m", "mobile"));
    let repo = ContentRepository::from_json(&projects, &blogs_doc(&[])).unwrap();
    assert_eq!(repo.projects().len(), 1);
}

#[test]
fn unknown_bucket_is_rejected() {
    let projects = format!(r#"{{"desktop":[{}]}}"#, project_json("d", "frontend"));
    let err = ContentRepository::from_json(&projects, &blogs_doc(&[])).unwrap_err();
    assert!(matches!(err, ContentError::UnknownCategory(ref key) if key == "desktop"));
}

#[test]
fn bucket_category_mismatch_is_rejected() {
    let projects = format!(r#"{{"backend":[{}]}}"#, project_json("x", "mobile"));
    let err = ContentRepository::from_json(&projects, &blogs_doc(&[])).unwrap_err();
    assert!(matches!(
        err,
        ContentError::CategoryMismatch { bucket: ProjectCategory::Backend, declared: ProjectCategory::Mobile, .. }
    ));
    assert_eq!(err.to_string(), "project x is listed under backend but declares mobile");
}

#[test]
fn duplicate_project_ids_are_rejected() {
    let projects = format!(
        r#"{{"frontend":[{}],"mobile":[{}]}}"#,
        project_json("1", "frontend"),
        project_json("1", "mobile"),
    );
    let err = ContentRepository::from_json(&projects, &blogs_doc(&[])).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateId { kind: "project", .. }));
}

#[test]
fn malformed_projects_document_reports_document_name() {
    let err = ContentRepository::from_json("[", &blogs_doc(&[])).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse projects.json"));
}

// =============================================================
// Blog document parsing
// =============================================================

#[test]
fn recent_posts_keeps_first_six_in_order() {
    let repo = ContentRepository::from_json("{}", &blogs_doc(&["1", "2", "3", "4", "5", "6", "7", "8"])).unwrap();
    let ids = repo.recent_posts().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(repo.blog_posts().len(), 8);
}

#[test]
fn recent_posts_with_fewer_than_six() {
    let repo = ContentRepository::from_json("{}", &blogs_doc(&["1", "2"])).unwrap();
    assert_eq!(repo.recent_posts().len(), 2);
}

#[test]
fn duplicate_post_ids_are_rejected() {
    let err = ContentRepository::from_json("{}", &blogs_doc(&["1", "1"])).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateId { kind: "blog post", .. }));
}

#[test]
fn default_repository_is_empty() {
    let repo = ContentRepository::default();
    assert!(repo.projects().is_empty());
    assert!(repo.recent_posts().is_empty());
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_ratings_and_levels_in_range() {
    assert!(catalog::TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    assert!(catalog::SKILLS.iter().all(|s| s.level <= 100));
}
