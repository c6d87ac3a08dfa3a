//! Derived views over the in-memory project and post collections.
//!
//! Every function here is pure: inputs are borrowed, results keep the
//! original relative order and borrow from the input.

use crate::types::{BlogPost, Project};
use std::collections::BTreeSet;

/// Filter value meaning "no restriction"
pub const ALL: &str = "all";

fn is_all(value: &str) -> bool {
    value == ALL
}

/// Projects using `tech`, or every project for the `all` sentinel
pub fn filter_projects_by_tech<'a>(projects: &'a [Project], tech: &str) -> Vec<&'a Project> {
    if is_all(tech) {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.uses(tech)).collect()
}

/// Filter options: `all` followed by every distinct tag in byte order.
///
/// Spellings are kept as written, so `React` and `react` are two options
/// that select the same projects.
pub fn technologies(projects: &[Project]) -> Vec<String> {
    let tags: BTreeSet<&String> = projects.iter().flat_map(|p| p.tech_stack.iter()).collect();

    let mut options = Vec::with_capacity(tags.len() + 1);
    options.push(ALL.to_string());
    options.extend(tags.into_iter().cloned());
    options
}

pub fn project_by_slug<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.slug == slug)
}

/// Search text and category selection for the blog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    pub query: String,
    pub category: String,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL.to_string(),
        }
    }
}

impl PostFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && is_all(&self.category)
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        matches_query(post, &self.query.to_lowercase())
            && (is_all(&self.category) || post.category == self.category)
    }

    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|p| self.matches(p)).collect()
    }
}

fn matches_query(post: &BlogPost, needle: &str) -> bool {
    needle.is_empty()
        || post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
        || post.content_html.to_lowercase().contains(needle)
}

/// Posts matching `query` (title, excerpt or body) within `category`
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &str, category: &str) -> Vec<&'a BlogPost> {
    PostFilter::new(query, category).apply(posts)
}

/// `all` followed by each category in first-appearance order
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for post in posts {
        if !options.contains(&post.category) {
            options.push(post.category.clone());
        }
    }
    options
}

pub fn post_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn project(id: &str, tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            slug: format!("project-{}", id),
            title: format!("Project {}", id),
            short_description: String::new(),
            full_description: String::new(),
            thumbnail: PathBuf::from("assets/thumb.png"),
            images: vec![],
            tech_stack: tags.iter().map(|t| t.to_string()).collect(),
            challenges: vec![],
            solutions: vec![],
            live_url: None,
            github_url: None,
            featured: id == "1",
        }
    }

    fn post(slug: &str, title: &str, category: &str, body: &str) -> BlogPost {
        BlogPost {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: format!("About {}", title),
            content_html: format!("<p>{}</p>", body),
            author: "Me".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            updated_date: None,
            tags: vec![],
            category: category.to_string(),
            cover_image: "/assets/cover.png".to_string(),
            reading_time: 1,
        }
    }

    fn seed_projects() -> Vec<Project> {
        vec![
            project("1", &["React"]),
            project("2", &["Vue"]),
            project("3", &["React", "Node"]),
        ]
    }

    fn seed_posts() -> Vec<BlogPost> {
        vec![
            post("async-rust", "Async Rust", "Engineering", "Futures and executors"),
            post("hiking", "Hiking the Alps", "Life", "Mountains and rust-coloured leaves"),
            post("css-grid", "CSS Grid", "Engineering", "Layouts without floats"),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    fn slugs(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_filter_by_tech_keeps_matching_in_order() {
        let projects = seed_projects();
        let result = filter_projects_by_tech(&projects, "React");
        assert_eq!(ids(&result), vec!["1", "3"]);
        assert!(result.iter().all(|p| p.uses("react")));
    }

    #[test]
    fn test_filter_by_tech_ignores_case() {
        let projects = seed_projects();
        assert_eq!(ids(&filter_projects_by_tech(&projects, "node")), vec!["3"]);
        assert_eq!(ids(&filter_projects_by_tech(&projects, "VUE")), vec!["2"]);
    }

    #[test]
    fn test_filter_by_all_returns_everything() {
        let projects = seed_projects();
        let result = filter_projects_by_tech(&projects, ALL);
        assert_eq!(result.len(), projects.len());
        for (filtered, original) in result.iter().zip(projects.iter()) {
            assert!(std::ptr::eq(*filtered, original));
        }
        // Only the exact sentinel disables filtering.
        assert!(filter_projects_by_tech(&projects, "All").is_empty());
    }

    #[test]
    fn test_filter_by_unknown_tech_is_empty() {
        let projects = seed_projects();
        assert!(filter_projects_by_tech(&projects, "Haskell").is_empty());
        assert!(filter_projects_by_tech(&[], "React").is_empty());
        assert!(filter_projects_by_tech(&[], ALL).is_empty());
    }

    #[test]
    fn test_technologies_sorted_and_deduplicated() {
        let projects = vec![project("1", &["React", "Node"]), project("2", &["React", "Go"])];
        assert_eq!(technologies(&projects), vec!["all", "Go", "Node", "React"]);
    }

    #[test]
    fn test_technologies_keep_spellings_in_byte_order() {
        let projects = vec![project("1", &["rust", "Axum"]), project("2", &["Rust", "rust"])];
        assert_eq!(technologies(&projects), vec!["all", "Axum", "Rust", "rust"]);

        let projects = vec![project("1", &["react"]), project("2", &["Vue"])];
        assert_eq!(technologies(&projects), vec!["all", "Vue", "react"]);
        assert_eq!(technologies(&[]), vec!["all"]);
    }

    #[test]
    fn test_project_lookup() {
        let projects = seed_projects();
        assert_eq!(project_by_slug(&projects, "project-2").map(|p| p.id.as_str()), Some("2"));
        assert!(project_by_slug(&projects, "missing").is_none());
    }

    #[test]
    fn test_post_filter_query_matches_title_excerpt_and_body() {
        let posts = seed_posts();
        assert_eq!(slugs(&filter_posts(&posts, "ASYNC", ALL)), vec!["async-rust"]);
        assert_eq!(slugs(&filter_posts(&posts, "about css", ALL)), vec!["css-grid"]);
        assert_eq!(
            slugs(&filter_posts(&posts, "rust", ALL)),
            vec!["async-rust", "hiking"]
        );
    }

    #[test]
    fn test_post_filter_requires_both_predicates() {
        let posts = seed_posts();
        let result = filter_posts(&posts, "rust", "Engineering");
        assert_eq!(slugs(&result), vec!["async-rust"]);
        assert!(result.iter().all(|p| p.category == "Engineering"));
    }

    #[test]
    fn test_post_filter_empty_query_and_unknown_category() {
        let posts = seed_posts();
        assert_eq!(filter_posts(&posts, "", ALL).len(), 3);
        assert!(filter_posts(&posts, "", "Recipes").is_empty());
    }

    #[test]
    fn test_post_filter_takes_query_and_sentinel_literally() {
        let posts = seed_posts();
        assert_eq!(filter_posts(&posts, "rust", ALL).len(), 2);
        assert!(filter_posts(&posts, "rust ", ALL).is_empty());
        assert!(filter_posts(&posts, "", "ALL").is_empty());
        assert!(filter_posts(&posts, "", " all").is_empty());
        assert!(!PostFilter::new(" ", ALL).is_unrestricted());
    }

    #[test]
    fn test_post_filter_is_idempotent() {
        let posts = seed_posts();
        let filter = PostFilter::new("rust", "Life");
        let once: Vec<BlogPost> = filter.apply(&posts).into_iter().cloned().collect();
        let twice: Vec<BlogPost> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_categories_first_appearance() {
        let posts = seed_posts();
        assert_eq!(categories(&posts), vec!["all", "Engineering", "Life"]);
        assert_eq!(categories(&[]), vec!["all"]);
    }

    #[test]
    fn test_default_post_filter_is_unrestricted() {
        let filter = PostFilter::default();
        assert!(filter.is_unrestricted());
        assert!(!PostFilter::new("x", ALL).is_unrestricted());
        assert_eq!(post_by_slug(&seed_posts(), "hiking").map(|p| p.category.as_str()), Some("Life"));
    }
}
