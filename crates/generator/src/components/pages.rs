//! Whole pages, one per route.

use super::Chrome;
use super::blog::{BlogListing, BlogTeaser, PostDetail, PostNotFound};
use super::home::{About, ActivityFeed, Contact, Hero, Skills, Testimonials, Timeline};
use super::layout::Layout;
use super::projects::{ProjectDetail, ProjectGallery, ProjectNotFound};
use crate::render::{ContactState, RenderMode, SiteData};
use folio_core::filter::{PostFilter, categories, technologies};
use folio_core::{BlogPost, Project};
use leptos::prelude::*;

#[component]
pub fn HomePage(chrome: Chrome, data: SiteData, contact: ContactState) -> impl IntoView {
    let portfolio = data.portfolio;
    let options = technologies(&portfolio.projects);
    let description = format!("{} - {}", portfolio.profile.role, portfolio.profile.tagline);
    let action = match chrome.mode {
        RenderMode::Preview => Some("/contact#contact".to_string()),
        RenderMode::Static => portfolio.integrations.contact_endpoint.clone(),
    };
    let mode = chrome.mode;
    let tech_slugs = chrome.tech_slugs.clone();
    let category_slugs = chrome.category_slugs.clone();

    view! {
        <Layout chrome=chrome title=String::new() description=description>
            <main>
                <Hero profile=portfolio.profile.clone()/>
                <About
                    profile=portfolio.profile.clone()
                    stats_username=portfolio.integrations.leetcode_username.clone()
                    stats=data.stats
                    mode=mode
                />
                <Skills skills=portfolio.skills/>
                <Timeline entries=portfolio.timeline/>
                <ProjectGallery
                    projects=portfolio.projects
                    technologies=options
                    selected=folio_core::filter::ALL.to_string()
                    slugs=tech_slugs
                />
                <BlogTeaser posts=data.posts slugs=category_slugs/>
                <Testimonials testimonials=portfolio.testimonials/>
                <ActivityFeed items=data.activity now=data.generated_at/>
                <Contact
                    email=portfolio.profile.email.clone()
                    action=action
                    form=contact.form
                    status=contact.status
                />
            </main>
        </Layout>
    }
}

#[component]
pub fn ProjectsPage(chrome: Chrome, projects: Vec<Project>, selected: String) -> impl IntoView {
    let options = technologies(&projects);
    let slugs = chrome.tech_slugs.clone();
    let title = if selected == folio_core::filter::ALL {
        "Projects".to_string()
    } else {
        format!("{} Projects", selected)
    };

    view! {
        <Layout chrome=chrome title=title description="Portfolio projects".to_string()>
            <main class="page">
                <ProjectGallery projects=projects technologies=options selected=selected slugs=slugs/>
            </main>
        </Layout>
    }
}

#[component]
pub fn ProjectPage(chrome: Chrome, project: Option<Project>) -> impl IntoView {
    match project {
        Some(project) => {
            let title = project.title.clone();
            let description = project.short_description.clone();
            let slugs = chrome.tech_slugs.clone();
            view! {
                <Layout chrome=chrome title=title description=description>
                    <ProjectDetail project=project slugs=slugs/>
                </Layout>
            }
            .into_any()
        }
        None => view! {
            <Layout chrome=chrome title="Project Not Found".to_string() description=String::new()>
                <ProjectNotFound/>
            </Layout>
        }
        .into_any(),
    }
}

#[component]
pub fn BlogPage(chrome: Chrome, posts: Vec<BlogPost>, filter: PostFilter) -> impl IntoView {
    let options = categories(&posts);
    let mode = chrome.mode;
    let slugs = chrome.category_slugs.clone();

    view! {
        <Layout
            chrome=chrome
            title="Blog".to_string()
            description="Read articles about software development, programming, and technology".to_string()
        >
            <BlogListing posts=posts categories=options filter=filter mode=mode slugs=slugs/>
        </Layout>
    }
}

#[component]
pub fn PostPage(chrome: Chrome, post: Option<BlogPost>) -> impl IntoView {
    let base_url = chrome.base_url.clone();
    let slugs = chrome.category_slugs.clone();
    match post {
        Some(post) => {
            let title = post.title.clone();
            let description = post.excerpt.clone();
            view! {
                <Layout chrome=chrome title=title description=description>
                    <PostDetail post=post base_url=base_url slugs=slugs/>
                </Layout>
            }
            .into_any()
        }
        None => view! {
            <Layout chrome=chrome title="Post Not Found".to_string() description=String::new()>
                <PostNotFound/>
            </Layout>
        }
        .into_any(),
    }
}

#[component]
pub fn NotFoundPage(chrome: Chrome) -> impl IntoView {
    view! {
        <Layout
            chrome=chrome
            title="404 - Page Not Found".to_string()
            description="The page you're looking for doesn't exist".to_string()
        >
            <main class="container page not-found">
                <h1 class="code">"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"Oops! The page you're looking for doesn't exist. It might have been moved or deleted."</p>
                <a class="button" href="/">"Go Home"</a>
            </main>
        </Layout>
    }
}
