//! Blog content loader: front matter + markdown documents into posts.

use crate::markdown::render_markdown;
use folio_core::config::parse_date;
use folio_core::{BlogPost, Error, Result, reading_time};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Header block at the top of every content document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    title: String,
    date: String, // Parse as NaiveDate
    excerpt: String,
    tags: Vec<String>,
    category: String,
    #[serde(alias = "cover_image")]
    cover_image: String,
    author: Option<String>,
    #[serde(alias = "updated_date")]
    updated_date: Option<String>, // Parse as NaiveDate
}

/// A document left out of the listing
#[derive(Debug, Clone)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of loading the blog directory
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Newest first
    pub posts: Vec<BlogPost>,
    pub skipped: Vec<SkippedDocument>,
}

/// Load every `*.md` document directly inside `dir`.
///
/// Malformed documents are skipped and logged rather than failing the
/// whole listing. A missing directory yields an empty report.
pub fn load_posts(dir: &Path, default_author: &str) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    if !dir.exists() {
        tracing::info!(dir = %dir.display(), "blog directory not found, no posts loaded");
        return Ok(report);
    }

    let mut documents: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    documents.sort();

    let mut seen = HashSet::new();
    for path in documents {
        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => {
                skip(&mut report, path, "file name is not valid UTF-8".to_string());
                continue;
            }
        };

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                skip(&mut report, path, err.to_string());
                continue;
            }
        };

        match parse_post(&slug, &source, default_author) {
            Ok(post) => {
                if !seen.insert(post.slug.clone()) {
                    skip(&mut report, path, format!("duplicate slug '{}'", post.slug));
                    continue;
                }
                report.posts.push(post);
            }
            Err(err) => skip(&mut report, path, err.to_string()),
        }
    }

    sort_posts(&mut report.posts);
    tracing::debug!(
        loaded = report.posts.len(),
        skipped = report.skipped.len(),
        "blog content loaded"
    );
    Ok(report)
}

fn skip(report: &mut LoadReport, path: PathBuf, reason: String) {
    tracing::warn!(document = %path.display(), %reason, "skipping blog document");
    report.skipped.push(SkippedDocument { path, reason });
}

/// Publish date descending, slug ascending on ties
pub fn sort_posts(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| {
        b.publish_date
            .cmp(&a.publish_date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Parse one content document into a post
pub fn parse_post(slug: &str, source: &str, default_author: &str) -> Result<BlogPost> {
    let front_matter_error = |reason: String| Error::FrontMatter {
        document: slug.to_string(),
        reason,
    };

    let (header, body) = split_front_matter(source)
        .ok_or_else(|| front_matter_error("missing '---' header block".to_string()))?;

    let meta: FrontMatter =
        serde_yaml::from_str(header).map_err(|e| front_matter_error(e.to_string()))?;

    let publish_date = parse_date(&meta.date, "date").map_err(|e| front_matter_error(e.to_string()))?;
    let updated_date = meta
        .updated_date
        .as_deref()
        .map(|d| parse_date(d, "updatedDate"))
        .transpose()
        .map_err(|e| front_matter_error(e.to_string()))?;

    Ok(BlogPost {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: meta.title,
        excerpt: meta.excerpt,
        content_html: render_markdown(body),
        author: meta.author.unwrap_or_else(|| default_author.to_string()),
        publish_date,
        updated_date,
        tags: meta.tags,
        category: meta.category,
        cover_image: meta.cover_image,
        reading_time: reading_time(body),
    })
}

/// Split `---\n<yaml>\n---\n<body>` into header and body
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn document(title: &str, date: &str, body: &str) -> String {
        format!(
            "---\ntitle: \"{}\"\ndate: {}\nexcerpt: Short summary\ntags: [rust, web]\ncategory: Engineering\ncoverImage: /assets/blog/cover.png\n---\n{}",
            title, date, body
        )
    }

    #[test]
    fn test_parse_post_fields() {
        let source = document("Hello World", "2025-03-04", "# Heading\n\nBody text here.\n");
        let post = parse_post("hello-world", &source, "Ada").unwrap();

        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.id, "hello-world");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.author, "Ada");
        assert_eq!(post.publish_date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.category, "Engineering");
        assert_eq!(post.cover_image, "/assets/blog/cover.png");
        assert!(post.content_html.contains("<h1>Heading</h1>"));
        assert_eq!(post.reading_time, 1);
    }

    #[test]
    fn test_parse_post_optional_fields_and_snake_case_aliases() {
        let source = "---\ntitle: T\ndate: 2024-01-01\nexcerpt: E\ntags: []\ncategory: Life\ncover_image: c.png\nauthor: Grace\nupdated_date: 2024-02-01\n---\nbody\n";
        let post = parse_post("t", source, "Ada").unwrap();
        assert_eq!(post.author, "Grace");
        assert_eq!(post.cover_image, "c.png");
        assert_eq!(post.updated_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_reading_time_counts_body_only() {
        let body = vec!["word"; 401].join(" ");
        let post = parse_post("long", &document("Long", "2025-01-01", &body), "Ada").unwrap();
        assert_eq!(post.reading_time, 3);

        let body = vec!["word"; 400].join(" ");
        let post = parse_post("exact", &document("Exact", "2025-01-01", &body), "Ada").unwrap();
        assert_eq!(post.reading_time, 2);
    }

    #[test]
    fn test_missing_header_is_error() {
        let err = parse_post("plain", "# Just markdown\n", "Ada").unwrap_err();
        assert!(err.to_string().contains("missing '---' header block"));
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let source = "---\ntitle: T\ndate: 2024-01-01\ntags: []\ncategory: C\ncoverImage: c.png\n---\nbody\n";
        let err = parse_post("no-excerpt", source, "Ada").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("no-excerpt"));
        assert!(message.contains("excerpt"));
    }

    #[test]
    fn test_bad_date_is_error() {
        let err = parse_post("bad", &document("Bad", "March 4th", "x"), "Ada").unwrap_err();
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_split_front_matter_crlf_and_unterminated() {
        let (header, body) = split_front_matter("---\r\ntitle: x\r\n---\r\nbody").unwrap();
        assert_eq!(header, "title: x\r\n");
        assert_eq!(body, "body");
        assert!(split_front_matter("---\ntitle: x\nbody").is_none());
    }

    #[test]
    fn test_load_posts_sorts_and_skips() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("older.md"), document("Older", "2024-05-01", "old")).unwrap();
        fs::write(dir.path().join("newer.md"), document("Newer", "2025-01-15", "new")).unwrap();
        fs::write(dir.path().join("broken.md"), "no header at all").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let report = load_posts(dir.path(), "Ada").unwrap();
        let slugs: Vec<&str> = report.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("broken.md"));
    }

    #[test]
    fn test_load_posts_same_date_ordered_by_slug() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), document("B", "2025-01-01", "b")).unwrap();
        fs::write(dir.path().join("a.md"), document("A", "2025-01-01", "a")).unwrap();

        let report = load_posts(dir.path(), "Ada").unwrap();
        let slugs: Vec<&str> = report.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_load_posts_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let report = load_posts(&dir.path().join("nope"), "Ada").unwrap();
        assert!(report.posts.is_empty());
        assert!(report.skipped.is_empty());
    }
}
