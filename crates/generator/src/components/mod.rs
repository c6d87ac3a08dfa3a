//! Leptos SSR components. Everything renders from plain owned data; there
//! are no signals and nothing hydrates.

pub mod blog;
pub mod home;
pub mod layout;
pub mod pages;
pub mod projects;

use crate::render::RenderMode;
use crate::routes::SelectorSlugs;
use folio_core::theme::ThemeContext;
use leptos::prelude::*;
use std::path::Path;

/// Site-wide bits every page needs: branding, links, theme
#[derive(Debug, Clone)]
pub struct Chrome {
    pub site_name: String,
    pub tagline: String,
    pub email: String,
    pub social: Vec<(&'static str, String)>,
    pub accent_color: String,
    pub base_url: String,
    pub theme: ThemeContext,
    pub mode: RenderMode,
    pub year: i32,
    /// URL segments for every technology on the site
    pub tech_slugs: SelectorSlugs,
    pub category_slugs: SelectorSlugs,
}

/// URL for a media path relative to the portfolio root
pub fn asset_url(path: &Path) -> String {
    let joined: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", joined.join("/"))
}

/// Render a full document, doctype included
pub fn render_document<V: IntoView + 'static>(page: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    let html = owner.with(|| page().to_html());
    format!("<!DOCTYPE html>{}", html)
}

/// Render a fragment (no doctype), used for partial responses
pub fn render_fragment<V: IntoView + 'static>(fragment: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| fragment().to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url(&PathBuf::from("assets/projects/a.png")), "/assets/projects/a.png");
        assert_eq!(asset_url(&PathBuf::from("cover.jpg")), "/cover.jpg");
    }
}
