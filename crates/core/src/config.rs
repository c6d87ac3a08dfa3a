use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::types::*;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw TOML configuration structure
/// This matches the portfolio.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    profile: RawProfile,
    #[serde(default)]
    social: Social,
    site: RawSite,
    #[serde(default)]
    integrations: Integrations,
    #[serde(default)]
    blog: Option<RawBlog>,
    #[serde(default)]
    skill: Vec<Skill>,
    #[serde(default)]
    timeline: Vec<RawTimelineEntry>,
    #[serde(default)]
    testimonial: Vec<RawTestimonial>,
    #[serde(default)]
    project: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    role: String,
    tagline: String,
    #[serde(default)]
    bio: Vec<String>,
    email: String,
    location: Option<String>,
    avatar: Option<String>, // Convert to PathBuf
    resume_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    domain: String,
    base_url: Option<String>,
    default_theme: Option<String>, // Parse as Theme
    accent_color: String,
}

#[derive(Debug, Deserialize)]
struct RawBlog {
    dir: Option<String>, // Convert to PathBuf
    default_author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTimelineEntry {
    id: String,
    title: String,
    organization: String,
    start_date: String,       // Parse as NaiveDate
    end_date: Option<String>, // Parse as NaiveDate, absent means ongoing
    description: String,
    kind: TimelineKind,
}

#[derive(Debug, Deserialize)]
struct RawTestimonial {
    id: String,
    name: String,
    role: String,
    company: String,
    avatar: Option<String>, // Convert to PathBuf
    content: String,
    rating: u8,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: String,
    slug: String,
    title: String,
    short_description: String,
    full_description: String,
    thumbnail: String, // Convert to PathBuf
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    tech_stack: Vec<String>,
    #[serde(default)]
    challenges: Vec<String>,
    #[serde(default)]
    solutions: Vec<String>,
    live_url: Option<String>,
    github_url: Option<String>,
    #[serde(default)]
    featured: bool,
}

/// Parse portfolio.toml from a file path
pub fn parse_portfolio_toml<P: AsRef<Path>>(path: P) -> Result<Portfolio> {
    let content = fs::read_to_string(path)?;
    parse_portfolio_toml_str(&content)
}

/// Parse portfolio.toml from a string (useful for testing)
pub fn parse_portfolio_toml_str(content: &str) -> Result<Portfolio> {
    let raw: RawConfig = toml::from_str(content)?;

    let avatar = raw
        .profile
        .avatar
        .as_deref()
        .map(|p| validate_path(p, "profile.avatar"))
        .transpose()?;

    let profile = Profile {
        name: raw.profile.name,
        role: raw.profile.role,
        tagline: raw.profile.tagline,
        bio: raw.profile.bio,
        email: raw.profile.email,
        location: raw.profile.location,
        avatar,
        resume_url: raw.profile.resume_url,
    };

    let default_theme = match raw.site.default_theme {
        Some(name) => name
            .parse::<Theme>()
            .map_err(|e| Error::ConfigParse(format!("Invalid site.default_theme: {}", e)))?,
        None => Theme::default(),
    };

    let base_url = raw
        .site
        .base_url
        .unwrap_or_else(|| format!("https://{}", raw.site.domain));

    let site = SiteConfig {
        domain: raw.site.domain,
        base_url: base_url.trim_end_matches('/').to_string(),
        default_theme,
        accent_color: raw.site.accent_color,
    };

    let blog = match raw.blog {
        Some(b) => BlogSettings {
            dir: match b.dir {
                Some(dir) => validate_path(&dir, "blog.dir")?,
                None => BlogSettings::default().dir,
            },
            default_author: b.default_author,
        },
        None => BlogSettings::default(),
    };

    let timeline = raw
        .timeline
        .into_iter()
        .map(|t| {
            let end_date = t
                .end_date
                .as_deref()
                .map(|d| parse_date(d, "timeline.end_date"))
                .transpose()?;
            Ok(TimelineEntry {
                start_date: parse_date(&t.start_date, "timeline.start_date")?,
                end_date,
                id: t.id,
                title: t.title,
                organization: t.organization,
                description: t.description,
                kind: t.kind,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let testimonials = raw
        .testimonial
        .into_iter()
        .map(|t| {
            if !(1..=5).contains(&t.rating) {
                return Err(Error::ConfigParse(format!(
                    "testimonial '{}' has rating {}, expected 1 to 5",
                    t.id, t.rating
                )));
            }
            let avatar = t
                .avatar
                .as_deref()
                .map(|p| validate_path(p, "testimonial.avatar"))
                .transpose()?;
            Ok(Testimonial {
                id: t.id,
                name: t.name,
                role: t.role,
                company: t.company,
                avatar,
                content: t.content,
                rating: t.rating,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut seen_slugs = HashSet::new();
    let projects = raw
        .project
        .into_iter()
        .map(|p| {
            if p.slug.trim().is_empty() {
                return Err(Error::ConfigParse(format!(
                    "project '{}' has an empty slug",
                    p.id
                )));
            }
            if !seen_slugs.insert(p.slug.clone()) {
                return Err(Error::ConfigParse(format!(
                    "Duplicate project slug '{}'",
                    p.slug
                )));
            }

            let thumbnail = validate_path(&p.thumbnail, "project.thumbnail")?;
            let images = p
                .images
                .iter()
                .map(|i| validate_path(i, "project.images"))
                .collect::<Result<Vec<_>>>()?;

            Ok(Project {
                id: p.id,
                slug: p.slug,
                title: p.title,
                short_description: p.short_description,
                full_description: p.full_description,
                thumbnail,
                images,
                tech_stack: p.tech_stack,
                challenges: p.challenges,
                solutions: p.solutions,
                live_url: p.live_url,
                github_url: p.github_url,
                featured: p.featured,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Portfolio {
        profile,
        social: raw.social,
        site,
        integrations: raw.integrations,
        blog,
        skills: raw.skill,
        timeline,
        testimonials,
        projects,
    })
}

/// Parse a YYYY-MM-DD date, naming the field on failure
pub fn parse_date(value: &str, field_name: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| Error::ConfigParse(format!("Invalid {} '{}': {}", field_name, value, e)))
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects:
/// - Absolute paths (starting with `/` or Windows drive letters)
/// - Paths containing parent directory references (`..`)
/// - Empty paths
///
/// Every media and content path in portfolio.toml goes through here so a
/// configuration file can never point the build outside the portfolio
/// directory.
///
/// ```text
/// validate_path("assets/projects/shop.png", "project.thumbnail")  → Ok(PathBuf)
/// validate_path("/etc/passwd", "project.thumbnail")  → Err("Absolute paths not allowed...")
/// validate_path("../../secret.png", "project.images")  → Err("Parent directory references...")
/// ```
pub fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}
