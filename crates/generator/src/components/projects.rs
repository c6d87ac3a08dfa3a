use super::asset_url;
use crate::routes::{SelectorSlugs, tech_href};
use folio_core::Project;
use folio_core::filter::{ALL, filter_projects_by_tech};
use leptos::prelude::*;

/// Gallery with technology filter controls.
///
/// `technologies` are the filter options (starting with `all`), `selected`
/// the current one, `slugs` the site-wide link segments.
#[component]
pub fn ProjectGallery(
    projects: Vec<Project>,
    technologies: Vec<String>,
    selected: String,
    slugs: SelectorSlugs,
) -> impl IntoView {
    let visible: Vec<Project> = filter_projects_by_tech(&projects, &selected)
        .into_iter()
        .cloned()
        .collect();

    let filters = technologies
        .into_iter()
        .map(|tech| {
            let active = tech == selected;
            let label = if tech == ALL { "All".to_string() } else { tech.clone() };
            view! {
                <li>
                    <a class="filter-chip" class:active=active href=tech_href(&slugs, &tech)>{label}</a>
                </li>
            }
        })
        .collect_view();

    let cards = if visible.is_empty() {
        let message = format!("No projects use {} yet.", selected);
        view! { <p class="empty-state">{message}</p> }.into_any()
    } else {
        view! {
            <div class="project-grid">
                {visible.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title">"My " <span class="highlight">"Projects"</span></h2>
                <ul class="filter-bar" aria-label="Filter by technology">{filters}</ul>
                {cards}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}/", project.slug);
    let live = project.live_url.clone().map(|url| {
        view! { <a href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a> }
    });
    let source = project.github_url.clone().map(|url| {
        view! { <a href=url target="_blank" rel="noopener noreferrer">"Source"</a> }
    });

    view! {
        <article class="project-card" class:featured=project.featured data-project-slug=project.slug.clone()>
            <a href=href.clone()>
                <img src=asset_url(&project.thumbnail) alt=project.title.clone() loading="lazy"/>
            </a>
            <div class="card-body">
                <h3><a href=href>{project.title}</a></h3>
                <p>{project.short_description}</p>
                <ul class="tags">
                    {project.tech_stack.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect_view()}
                </ul>
                <div class="card-links">{live}{source}</div>
            </div>
        </article>
    }
}

/// Project page body
#[component]
pub fn ProjectDetail(project: Project, slugs: SelectorSlugs) -> impl IntoView {
    let live = project.live_url.clone().map(|url| {
        view! { <a class="button" href=url target="_blank" rel="noopener noreferrer">"View Live Demo"</a> }
    });
    let source = project.github_url.clone().map(|url| {
        view! { <a class="button button-outline" href=url target="_blank" rel="noopener noreferrer">"View Source Code"</a> }
    });
    let gallery = (!project.images.is_empty()).then(|| {
        let title = project.title.clone();
        view! {
            <div class="project-images">
                {project
                    .images
                    .iter()
                    .map(|path| view! { <img src=asset_url(path) alt=title.clone() loading="lazy"/> })
                    .collect_view()}
            </div>
        }
    });
    let list = |items: Vec<String>| {
        view! { <ul>{items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}</ul> }
    };
    let challenges = list(project.challenges.clone());
    let solutions = list(project.solutions.clone());

    view! {
        <main class="container page project-detail">
            <nav class="breadcrumb">
                <a href="/">"Home"</a>
                " / "
                <a href="/projects/">"Projects"</a>
                " / "
                <span>{project.title.clone()}</span>
            </nav>
            <header>
                <h1>{project.title.clone()}</h1>
                <p class="lead">{project.short_description.clone()}</p>
                <div class="actions">{live}{source}</div>
            </header>
            <img class="project-hero" src=asset_url(&project.thumbnail) alt=project.title.clone()/>
            {gallery}
            <section>
                <h2>"Overview"</h2>
                <p>{project.full_description.clone()}</p>
            </section>
            <section>
                <h2>"Technologies"</h2>
                <ul class="tags">
                    {project
                        .tech_stack
                        .iter()
                        .map(|t| view! { <li class="tag"><a href=tech_href(&slugs, t)>{t.clone()}</a></li> })
                        .collect_view()}
                </ul>
            </section>
            <section class="two-column">
                <div>
                    <h2>"Challenges"</h2>
                    {challenges}
                </div>
                <div>
                    <h2>"Solutions"</h2>
                    {solutions}
                </div>
            </section>
        </main>
    }
}

#[component]
pub fn ProjectNotFound() -> impl IntoView {
    view! {
        <main class="container page not-found">
            <h1>"Project Not Found"</h1>
            <p>"The project you're looking for doesn't exist."</p>
            <a class="button" href="/projects/">"Back to Projects"</a>
        </main>
    }
}
