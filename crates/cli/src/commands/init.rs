use anyhow::{Context, Result};
use chrono::Local;
use folio_core::config::parse_portfolio_toml_str;
use folio_core::contact::is_valid_email;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::site::ASSETS_DIR;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
const AVATAR_HINTS: &[&str] = &["avatar", "profile", "headshot", "portrait"];
const MAX_SCAN_DEPTH: usize = 2; // Maximum directory depth for photo scanning

/// Escape a string for safe inclusion in a TOML basic string
///
/// The template carries comments and hand-picked layout, so it is written
/// out as text rather than serialized.
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new portfolio directory with smart defaults.
///
/// This command:
/// - Looks for a profile photo (`avatar.jpg`, `headshot.png`, ...) and
///   copies it into `assets/`
/// - Creates `assets/projects/` with a placeholder thumbnail
/// - Creates `content/blog/` with a first post
/// - Generates portfolio.toml with one sample project
///
/// # Errors
///
/// Returns an error if the directory doesn't exist, portfolio.toml already
/// exists, the email is malformed or a file operation fails.
pub async fn run(path: PathBuf, name: Option<String>, email: Option<String>) -> Result<()> {
    println!("Initializing portfolio directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join("portfolio.toml");
    if config_path.exists() {
        anyhow::bail!(
            "portfolio.toml already exists at {}\nHint: Delete it first or use a different directory",
            config_path.display()
        );
    }

    if let Some(e) = email.as_deref()
        && !is_valid_email(e)
    {
        anyhow::bail!("Invalid email format: '{}'", e);
    }

    println!("\nAnalyzing directory...");
    let photo = detect_profile_photo(&path);

    create_directory_structure(&path)?;

    let avatar = match photo {
        Some(photo) => {
            let avatar = copy_avatar(&path, &photo)?;
            println!("✓ Detected profile photo: {}", photo.display());
            Some(avatar)
        }
        None => None,
    };

    write_placeholder_thumbnail(&path)?;
    generate_portfolio_toml(&path, name.as_deref(), email.as_deref(), avatar.as_deref())?;
    generate_sample_post(&path, name.as_deref())?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── portfolio.toml       ← Edit this to describe yourself and your work");
    println!("  ├── assets/");
    if let Some(avatar) = &avatar {
        println!("  │   ├── {}", avatar.trim_start_matches("assets/"));
    }
    println!("  │   └── projects/sample.png");
    println!("  └── content/blog/");
    println!("      └── hello-world.md   ← Your first post");

    println!("\nNext steps:");
    println!("  1. Edit portfolio.toml (profile, skills, projects, integrations)");
    println!("  2. Write posts in content/blog/");
    println!("  3. Preview: folio preview {}", path.display());

    Ok(())
}

/// Find a likely profile photo near the top of `dir`.
///
/// Hinted names win; the first image in sorted order is not guessed at.
fn detect_profile_photo(dir: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(MAX_SCAN_DEPTH)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            let is_image = p
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
            let stem = p
                .file_stem()
                .map(|s| s.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            is_image && AVATAR_HINTS.iter().any(|hint| stem.contains(hint))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

fn create_directory_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join(ASSETS_DIR).join("projects"))?;
    fs::create_dir_all(base.join("content").join("blog"))?;
    Ok(())
}

/// Copy the photo to `assets/avatar.<ext>`, returning the configured path
fn copy_avatar(base: &Path, photo: &Path) -> Result<String> {
    let ext = photo
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg")
        .to_lowercase();
    let relative = format!("{}/avatar.{}", ASSETS_DIR, ext);
    let dest = base.join(&relative);

    // Already in place
    if dest.exists()
        && let (Ok(src_canon), Ok(dst_canon)) = (photo.canonicalize(), dest.canonicalize())
        && src_canon == dst_canon
    {
        return Ok(relative);
    }

    fs::copy(photo, &dest).context("Failed to copy profile photo")?;
    Ok(relative)
}

fn write_placeholder_thumbnail(base: &Path) -> Result<()> {
    let dest = base.join(ASSETS_DIR).join("projects").join("sample.png");
    RgbImage::from_pixel(480, 270, Rgb([16, 185, 129]))
        .save(&dest)
        .with_context(|| format!("Failed to write {}", dest.display()))
}

fn generate_portfolio_toml(
    base: &Path,
    name: Option<&str>,
    email: Option<&str>,
    avatar: Option<&str>,
) -> Result<()> {
    let this_year = Local::now().format("%Y").to_string();

    let full_name = toml_escape_string(name.unwrap_or("Your Name"));
    let contact_email = toml_escape_string(email.unwrap_or("you@example.com"));
    let name_comment = if name.is_some() { "" } else { "  # TODO: Set your name" };
    let email_comment = if email.is_some() { "" } else { "  # TODO: Set email" };
    let avatar_line = match avatar {
        Some(path) => format!("avatar = \"{}\"\n", toml_escape_string(path)),
        None => "# avatar = \"assets/avatar.jpg\"\n".to_string(),
    };

    let toml = format!(
        "# Generated by folio init\n\
# Edit this file to customize your portfolio\n\
\n\
[profile]\n\
name = \"{full_name}\"{name_comment}\n\
role = \"Software Engineer\"  # TODO: Set your role\n\
tagline = \"I build things for the web.\"\n\
bio = [\n\
    \"Write a paragraph or two about yourself.\",\n\
]\n\
email = \"{contact_email}\"{email_comment}\n\
# location = \"Remote\"\n\
{avatar_line}\
# resume_url = \"https://example.com/resume.pdf\"\n\
\n\
[social]\n\
# github = \"https://github.com/you\"\n\
# linkedin = \"https://www.linkedin.com/in/you\"\n\
\n\
[site]\n\
domain = \"portfolio.example.com\"  # TODO: Set domain\n\
default_theme = \"dark\"\n\
accent_color = \"#10b981\"\n\
\n\
[integrations]\n\
# leetcode_username = \"you\"\n\
# github_username = \"you\"\n\
# contact_endpoint = \"https://formspree.io/f/your-form-id\"\n\
\n\
[blog]\n\
dir = \"content/blog\"\n\
\n\
[[skill]]\n\
name = \"Rust\"\n\
category = \"Languages\"\n\
level = \"advanced\"\n\
\n\
[[timeline]]\n\
id = \"current-role\"\n\
title = \"Software Engineer\"\n\
organization = \"Your Company\"\n\
start_date = \"{this_year}-01-01\"\n\
description = \"What you work on.\"\n\
kind = \"work\"\n\
\n\
[[project]]\n\
id = \"1\"\n\
slug = \"sample-project\"\n\
title = \"Sample Project\"\n\
short_description = \"One line about the project.\"\n\
full_description = \"A longer description of what it does and why.\"\n\
thumbnail = \"assets/projects/sample.png\"\n\
tech_stack = [\"Rust\"]\n\
challenges = [\"The hard part\"]\n\
solutions = [\"How you solved it\"]\n\
featured = true\n\
# live_url = \"https://example.com\"\n\
# github_url = \"https://github.com/you/sample\"\n"
    );

    // Validate the generated TOML can be parsed
    parse_portfolio_toml_str(&toml)
        .context("Generated portfolio.toml is invalid - this is a bug in the template generator")?;

    fs::write(base.join("portfolio.toml"), toml)?;
    Ok(())
}

fn generate_sample_post(base: &Path, author: Option<&str>) -> Result<()> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let author_line = author
        .map(|a| format!("author: \"{}\"\n", a.replace('"', "\\\"")))
        .unwrap_or_default();

    let post = format!(
        r#"---
title: "Hello, World"
date: {today}
excerpt: "The first post on my new site."
tags: [meta]
category: "General"
coverImage: /assets/projects/sample.png
{author_line}---

# Hello, World

This is markdown, so you can use:

- **Bold** and *italic* text
- Lists, tables and footnotes
- Code blocks

```rust
fn main() {{
    println!("hello");
}}
```
"#
    );

    fs::write(base.join("content/blog/hello-world.md"), post)?;
    Ok(())
}
