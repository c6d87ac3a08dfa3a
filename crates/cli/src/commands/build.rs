use anyhow::{Context, Result};
use chrono::Utc;
use folio_core::theme::{Theme, ThemeContext};
use folio_generator::{RenderMode, RenderOptions, generate_site};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::site::{ASSETS_DIR, activity_cache, fetch_activity, fetch_stats, load_site};

#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Skip the statistics and activity requests
    pub offline: bool,
    pub theme: Option<Theme>,
    pub cache_dir: Option<PathBuf>,
}

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf, options: BuildOptions) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let mut site = load_site(&path)?;
    site.generated_at = Utc::now();

    println!("✓ Loaded: {}", site.portfolio.profile.name);
    println!("  Projects: {}", site.portfolio.projects.len());
    println!("  Posts: {}", site.posts.len());
    println!();

    if options.offline {
        println!("📴 Offline: skipping statistics and activity");
    } else {
        println!("🌐 Fetching remote data...");
        let cache = activity_cache(options.cache_dir.as_ref());
        site.activity = fetch_activity(&site.portfolio, cache, site.generated_at).await;
        site.stats = fetch_stats(&site.portfolio).await;
        println!("   ✓ {} activity item(s)", site.activity.len());
        if site.stats.data().is_some() {
            println!("   ✓ Coding statistics");
        } else if site.portfolio.integrations.leetcode_username.is_some() {
            println!("   ⚠ Coding statistics unavailable, the popup links to the profile instead");
        }
    }
    println!();

    let theme = options
        .theme
        .unwrap_or(site.portfolio.site.default_theme);
    let render = RenderOptions {
        theme: ThemeContext::new(theme),
        mode: RenderMode::Static,
    };

    println!("📄 Generating pages...");
    let generated = generate_site(&site, &render);
    fs::create_dir_all(&output).context("Failed to create output directory")?;
    for (page, html) in &generated.pages {
        write_file(&output.join(page), html.as_bytes())?;
    }
    println!("   ✓ Generated {} pages", generated.pages.len());

    for (asset, data) in &generated.assets {
        write_file(&output.join(asset), data)?;
    }
    println!("   ✓ Wrote {} site assets", generated.assets.len());

    println!("🎨 Copying media...");
    let copied = copy_dir(&path.join(ASSETS_DIR), &output.join(ASSETS_DIR))?;
    println!("   ✓ Copied {} media files", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

/// Recursive copy, skipping hidden files. Returns the number of files copied.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_offline_writes_every_page() {
        let source = TempDir::new().unwrap();
        init::run(
            source.path().to_path_buf(),
            Some("Ada Lovelace".to_string()),
            Some("ada@example.com".to_string()),
        )
        .await
        .unwrap();
        fs::write(source.path().join("assets/.DS_Store"), b"junk").unwrap();

        let output = TempDir::new().unwrap();
        let options = BuildOptions {
            offline: true,
            theme: Some(Theme::Light),
            cache_dir: None,
        };
        run(source.path().to_path_buf(), output.path().to_path_buf(), options)
            .await
            .unwrap();

        let out = output.path();
        for file in [
            "index.html",
            "404.html",
            "style.css",
            "site.js",
            "projects/index.html",
            "projects/sample-project/index.html",
            "blog/index.html",
            "blog/hello-world/index.html",
            "assets/projects/sample.png",
        ] {
            assert!(out.join(file).is_file(), "missing {}", file);
        }
        assert!(!out.join("assets/.DS_Store").exists());

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("data-theme=\"light\""));
        assert!(home.contains("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_build_requires_config() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let err = run(
            source.path().to_path_buf(),
            output.path().to_path_buf(),
            BuildOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("portfolio.toml not found"));
    }

    #[test]
    fn test_copy_dir_missing_source() {
        let dir = TempDir::new().unwrap();
        assert_eq!(copy_dir(&dir.path().join("nope"), &dir.path().join("out")).unwrap(), 0);
    }
}
