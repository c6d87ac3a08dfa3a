// Static site generation with Leptos SSR
#![recursion_limit = "256"]

pub mod assets;
pub mod components;
pub mod content;
pub mod markdown;
pub mod render;
pub mod routes;

pub use content::{LoadReport, SkippedDocument, load_posts};
pub use render::{
    ContactState, GeneratedSite, RenderMode, RenderOptions, RenderedPage, SiteData, generate_site,
    render_home, render_route, render_stats_panel,
};
pub use routes::Route;
