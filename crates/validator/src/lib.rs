// Portfolio validation: configuration, media files and blog documents

use folio_core::{Portfolio, parse_portfolio_toml};
use folio_generator::content::load_posts;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory copied verbatim into the built site
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    /// True when nothing blocks a build
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_portfolio<P: AsRef<Path>>(root: P) -> ValidationReport {
    let root = root.as_ref();
    let mut report = ValidationReport::default();

    let config_path = root.join("portfolio.toml");
    if !config_path.exists() {
        report
            .errors
            .push(format!("portfolio.toml not found in {}", root.display()));
        return report;
    }

    let portfolio = match parse_portfolio_toml(&config_path) {
        Ok(portfolio) => portfolio,
        Err(e) => {
            report.errors.push(format!("portfolio.toml: {}", e));
            return report;
        }
    };
    report.info.push(format!(
        "portfolio.toml valid: {} projects, {} skills, {} timeline entries, {} testimonials",
        portfolio.projects.len(),
        portfolio.skills.len(),
        portfolio.timeline.len(),
        portfolio.testimonials.len()
    ));

    for (field, path) in media_references(&portfolio) {
        check_media(root, &field, &path, &mut report);
    }
    check_integrations(&portfolio, &mut report);
    check_blog(root, &portfolio, &mut report);

    report
}

/// Every local image the configuration points at, with the field naming it
fn media_references(portfolio: &Portfolio) -> Vec<(String, PathBuf)> {
    let mut refs = Vec::new();
    if let Some(avatar) = &portfolio.profile.avatar {
        refs.push(("profile.avatar".to_string(), avatar.clone()));
    }
    for t in &portfolio.testimonials {
        if let Some(avatar) = &t.avatar {
            refs.push((format!("testimonial '{}' avatar", t.id), avatar.clone()));
        }
    }
    for p in &portfolio.projects {
        refs.push((format!("project '{}' thumbnail", p.slug), p.thumbnail.clone()));
        for image in &p.images {
            refs.push((format!("project '{}' image", p.slug), image.clone()));
        }
    }
    refs
}

fn check_media(root: &Path, field: &str, path: &Path, report: &mut ValidationReport) {
    let full = root.join(path);
    tracing::debug!("Checking {}: {}", field, full.display());
    if !full.is_file() {
        report
            .errors
            .push(format!("{}: file not found: {}", field, path.display()));
        return;
    }

    if !path.starts_with(ASSETS_DIR) {
        report.warnings.push(format!(
            "{}: {} is outside {}/ and will not be published",
            field,
            path.display(),
            ASSETS_DIR
        ));
    }

    let mime = mime_guess::from_path(&full).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        report
            .warnings
            .push(format!("{}: {} does not look like an image ({})", field, path.display(), mime));
        return;
    }
    // Vector images are served as-is.
    if mime.subtype() == mime_guess::mime::SVG {
        return;
    }

    match image::ImageReader::open(&full).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => {
            if let Err(e) = reader.decode() {
                report
                    .errors
                    .push(format!("{}: cannot decode {}: {}", field, path.display(), e));
            }
        }
        Err(e) => report
            .errors
            .push(format!("{}: cannot open {}: {}", field, path.display(), e)),
    }
}

fn check_integrations(portfolio: &Portfolio, report: &mut ValidationReport) {
    let integrations = &portfolio.integrations;

    match &integrations.contact_endpoint {
        Some(endpoint) if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") => {
            report.warnings.push(format!(
                "integrations.contact_endpoint is not an http(s) URL: {}",
                endpoint
            ));
        }
        Some(_) => {}
        None => report
            .info
            .push("No contact endpoint: the contact section shows a mail link".to_string()),
    }
    if integrations.leetcode_username.is_none() {
        report
            .info
            .push("No leetcode_username: the statistics popup is hidden".to_string());
    }
    if integrations.github_username.is_none() {
        report
            .info
            .push("No github_username: the activity feed stays empty".to_string());
    }
}

fn check_blog(root: &Path, portfolio: &Portfolio, report: &mut ValidationReport) {
    let blog_dir = root.join(&portfolio.blog.dir);
    if !blog_dir.exists() {
        report
            .info
            .push(format!("No blog directory at {}", portfolio.blog.dir.display()));
        return;
    }

    // Only top-level markdown files become posts.
    for entry in WalkDir::new(&blog_dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let is_markdown = entry.path().extension().is_some_and(|ext| ext == "md");
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if !is_markdown {
            report
                .warnings
                .push(format!("Ignoring non-markdown file {}", relative.display()));
        } else if entry.depth() > 1 {
            report
                .warnings
                .push(format!("Ignoring nested document {}", relative.display()));
        }
    }

    let loaded = match load_posts(&blog_dir, portfolio.default_author()) {
        Ok(loaded) => loaded,
        Err(e) => {
            report.errors.push(format!("Cannot read blog directory: {}", e));
            return;
        }
    };

    for skipped in &loaded.skipped {
        let relative = skipped.path.strip_prefix(root).unwrap_or(&skipped.path);
        report
            .errors
            .push(format!("{}: {}", relative.display(), skipped.reason));
    }

    for post in &loaded.posts {
        if let Some(local) = post.cover_image.strip_prefix('/')
            && !root.join(local).is_file()
        {
            report.warnings.push(format!(
                "Post '{}': cover image {} not found",
                post.slug, post.cover_image
            ));
        }
    }

    report.info.push(format!("{} blog posts", loaded.posts.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r##"
[profile]
name = "Ada Lovelace"
role = "Software Engineer"
tagline = "I build calm, fast software."
email = "ada@example.com"

[site]
domain = "ada.example.com"
accent_color = "#22c55e"

[integrations]
leetcode_username = "ada"
github_username = "ada"
contact_endpoint = "https://forms.example.com/submit"

[[project]]
id = "1"
slug = "engine"
title = "Analytical Engine"
short_description = "Gears."
full_description = "Many gears."
thumbnail = "assets/engine.png"
tech_stack = ["Rust"]
"##;

    const POST: &str = "---\ntitle: Hello\ndate: 2025-01-05\nexcerpt: Hi\ntags: [rust]\ncategory: Engineering\ncoverImage: /assets/engine.png\n---\nSome words here.\n";

    fn portfolio_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("portfolio.toml"), CONFIG).unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        image::RgbImage::new(4, 4)
            .save(dir.path().join("assets/engine.png"))
            .unwrap();
        fs::create_dir_all(dir.path().join("content/blog")).unwrap();
        fs::write(dir.path().join("content/blog/hello.md"), POST).unwrap();
        dir
    }

    #[test]
    fn test_valid_portfolio() {
        let dir = portfolio_dir();
        let report = validate_portfolio(dir.path());
        assert!(report.is_ok(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
        assert!(report.info.iter().any(|i| i == "1 blog posts"));
    }

    #[test]
    fn test_missing_config() {
        let dir = TempDir::new().unwrap();
        let report = validate_portfolio(dir.path());
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("portfolio.toml not found"));
    }

    #[test]
    fn test_missing_and_broken_media() {
        let dir = portfolio_dir();
        fs::remove_file(dir.path().join("assets/engine.png")).unwrap();
        let report = validate_portfolio(dir.path());
        assert!(report.errors.iter().any(|e| e.contains("file not found: assets/engine.png")));

        fs::write(dir.path().join("assets/engine.png"), b"not a png").unwrap();
        let report = validate_portfolio(dir.path());
        assert!(report.errors.iter().any(|e| e.contains("cannot decode")));
    }

    #[test]
    fn test_malformed_post_is_an_error_not_a_crash() {
        let dir = portfolio_dir();
        fs::write(dir.path().join("content/blog/broken.md"), "no header here").unwrap();
        fs::write(dir.path().join("content/blog/notes.txt"), "scratch").unwrap();

        let report = validate_portfolio(dir.path());
        assert!(report.errors.iter().any(|e| e.contains("broken.md")));
        assert!(report.warnings.iter().any(|w| w.contains("notes.txt")));
        assert!(report.info.iter().any(|i| i == "1 blog posts"));
    }

    #[test]
    fn test_media_outside_assets_warns() {
        let dir = portfolio_dir();
        fs::copy(dir.path().join("assets/engine.png"), dir.path().join("engine.png")).unwrap();
        let config = CONFIG.replace("assets/engine.png", "engine.png");
        fs::write(dir.path().join("portfolio.toml"), config).unwrap();

        let report = validate_portfolio(dir.path());
        assert!(report.is_ok());
        assert!(report.warnings.iter().any(|w| w.contains("will not be published")));
    }
}
