use crate::assets;
use crate::components::home::StatsPanel;
use crate::components::pages::{
    BlogPage, HomePage, NotFoundPage, PostPage, ProjectPage, ProjectsPage,
};
use crate::components::{Chrome, render_document, render_fragment};
use crate::routes::{Route, SelectorSlugs};
use chrono::{DateTime, Datelike, Utc};
use folio_core::contact::{ContactForm, ContactStatus};
use folio_core::filter::{ALL, PostFilter, categories, post_by_slug, project_by_slug, technologies};
use folio_core::remote::RemoteData;
use folio_core::theme::ThemeContext;
use folio_core::{ActivityItem, BlogPost, CodingStats, Portfolio};
use leptos::prelude::*;

/// Where the rendered HTML is going to be served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Files for a static host
    Static,
    /// Responses from the local preview server
    Preview,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub theme: ThemeContext,
    pub mode: RenderMode,
}

/// Everything the pages are rendered from
#[derive(Debug, Clone)]
pub struct SiteData {
    pub portfolio: Portfolio,
    /// Newest first
    pub posts: Vec<BlogPost>,
    pub activity: Vec<ActivityItem>,
    pub stats: RemoteData<CodingStats>,
    /// Reference point for relative dates and the copyright year
    pub generated_at: DateTime<Utc>,
}

impl SiteData {
    pub fn new(portfolio: Portfolio, posts: Vec<BlogPost>) -> Self {
        Self {
            portfolio,
            posts,
            activity: Vec::new(),
            stats: RemoteData::Idle,
            generated_at: Utc::now(),
        }
    }
}

/// Contact form values and outcome echoed back into the home page
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: ContactStatus,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// False when the route (or the slug it names) does not exist
    pub found: bool,
    pub html: String,
}

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

fn chrome(data: &SiteData, options: &RenderOptions) -> Chrome {
    let portfolio = &data.portfolio;
    Chrome {
        site_name: portfolio.profile.name.clone(),
        tagline: portfolio.profile.tagline.clone(),
        email: portfolio.profile.email.clone(),
        social: portfolio.social.links(),
        accent_color: portfolio.site.accent_color.clone(),
        base_url: portfolio.site.base_url.clone(),
        theme: options.theme,
        mode: options.mode,
        year: data.generated_at.year(),
        tech_slugs: SelectorSlugs::new(&technologies(&portfolio.projects)),
        category_slugs: SelectorSlugs::new(&categories(&data.posts)),
    }
}

pub fn render_route(route: &Route, data: &SiteData, options: &RenderOptions) -> RenderedPage {
    match route {
        Route::Home => RenderedPage {
            found: true,
            html: render_home(data, options, ContactState::default()),
        },
        Route::Projects { tech } => {
            let projects = data.portfolio.projects.clone();
            let chrome = chrome(data, options);
            let selected = chrome.tech_slugs.resolve(tech);
            RenderedPage {
                found: true,
                html: render_document(move || {
                    view! { <ProjectsPage chrome=chrome projects=projects selected=selected/> }
                }),
            }
        }
        Route::Project { slug } => {
            let project = project_by_slug(&data.portfolio.projects, slug).cloned();
            let found = project.is_some();
            let chrome = chrome(data, options);
            RenderedPage {
                found,
                html: render_document(move || view! { <ProjectPage chrome=chrome project=project/> }),
            }
        }
        Route::Blog { query, category } => {
            let posts = data.posts.clone();
            let chrome = chrome(data, options);
            let filter = PostFilter::new(query.clone(), chrome.category_slugs.resolve(category));
            RenderedPage {
                found: true,
                html: render_document(move || view! { <BlogPage chrome=chrome posts=posts filter=filter/> }),
            }
        }
        Route::Post { slug } => {
            let post = post_by_slug(&data.posts, slug).cloned();
            let found = post.is_some();
            let chrome = chrome(data, options);
            RenderedPage {
                found,
                html: render_document(move || view! { <PostPage chrome=chrome post=post/> }),
            }
        }
        Route::NotFound => {
            let chrome = chrome(data, options);
            RenderedPage {
                found: false,
                html: render_document(move || view! { <NotFoundPage chrome=chrome/> }),
            }
        }
    }
}

/// Home page with the contact section in a given state
pub fn render_home(data: &SiteData, options: &RenderOptions, contact: ContactState) -> String {
    let chrome = chrome(data, options);
    let data = data.clone();
    render_document(move || view! { <HomePage chrome=chrome data=data contact=contact/> })
}

/// Statistics popup body, served on its own when the popup opens
pub fn render_stats_panel(username: &str, state: RemoteData<CodingStats>) -> String {
    let username = username.to_string();
    render_fragment(move || view! { <StatsPanel username=username state=state/> })
}

/// Every route a static build writes
pub fn site_routes(data: &SiteData) -> Vec<Route> {
    let mut routes = vec![
        Route::Home,
        Route::Projects {
            tech: ALL.to_string(),
        },
    ];
    let tech_slugs = SelectorSlugs::new(&technologies(&data.portfolio.projects));
    routes.extend(tech_slugs.slugs().map(|slug| Route::Projects {
        tech: slug.to_string(),
    }));
    routes.extend(data.portfolio.projects.iter().map(|p| Route::Project {
        slug: p.slug.clone(),
    }));
    routes.push(Route::Blog {
        query: String::new(),
        category: ALL.to_string(),
    });
    let category_slugs = SelectorSlugs::new(&categories(&data.posts));
    routes.extend(category_slugs.slugs().map(|slug| Route::Blog {
        query: String::new(),
        category: slug.to_string(),
    }));
    routes.extend(data.posts.iter().map(|p| Route::Post {
        slug: p.slug.clone(),
    }));
    routes.push(Route::NotFound);
    routes
}

/// Render the whole site for a static host
pub fn generate_site(data: &SiteData, options: &RenderOptions) -> GeneratedSite {
    let pages = site_routes(data)
        .iter()
        .map(|route| (route.output_path(), render_route(route, data, options).html))
        .collect();

    GeneratedSite {
        pages,
        assets: vec![
            ("style.css".to_string(), assets::stylesheet().as_bytes().to_vec()),
            ("site.js".to_string(), assets::site_script().as_bytes().to_vec()),
        ],
    }
}
