use crate::render::RenderMode;
use crate::routes::{SelectorSlugs, category_href};
use folio_core::BlogPost;
use folio_core::filter::{ALL, PostFilter};
use leptos::prelude::*;

/// Latest posts shown on the landing page
pub const TEASER_COUNT: usize = 3;

/// Lower-cased text the client-side search looks through
fn search_text(post: &BlogPost) -> String {
    format!("{}\n{}\n{}", post.title, post.excerpt, post.content_html).to_lowercase()
}

#[component]
pub fn BlogCard(post: BlogPost, slugs: SelectorSlugs) -> impl IntoView {
    let category_link = category_href(&slugs, &post.category);
    let href = format!("/blog/{}/", post.slug);
    let meta = format!("{} · {} min read", post.display_date(), post.reading_time);
    let search = search_text(&post);

    view! {
        <article
            class="blog-card"
            data-post-slug=post.slug.clone()
            data-category=post.category.clone()
            data-search=search
        >
            <a href=href.clone()>
                <img src=post.cover_image.clone() alt=post.title.clone() loading="lazy"/>
            </a>
            <div class="card-body">
                <a class="category" href=category_link>{post.category.clone()}</a>
                <h3><a href=href>{post.title}</a></h3>
                <p>{post.excerpt}</p>
                <p class="meta">{meta}</p>
                <ul class="tags">
                    {post.tags.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}

#[component]
pub fn BlogTeaser(posts: Vec<BlogPost>, slugs: SelectorSlugs) -> impl IntoView {
    let body = if posts.is_empty() {
        view! { <p class="empty-state">"No blog posts yet. Check back soon!"</p> }.into_any()
    } else {
        view! {
            <div class="blog-grid">
                {posts
                    .into_iter()
                    .take(TEASER_COUNT)
                    .map(|post| view! { <BlogCard post=post slugs=slugs.clone()/> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="blog" class="section blog-teaser">
            <div class="container">
                <h2 class="section-title">"Latest " <span class="highlight">"Posts"</span></h2>
                {body}
                <a class="button button-outline" href="/blog/">"View all posts"</a>
            </div>
        </section>
    }
}

/// Listing with search box and category controls.
///
/// The server applies `filter`; in static output the client script narrows
/// the cards further as the visitor types.
#[component]
pub fn BlogListing(
    posts: Vec<BlogPost>,
    categories: Vec<String>,
    filter: PostFilter,
    mode: RenderMode,
    slugs: SelectorSlugs,
) -> impl IntoView {
    let visible: Vec<BlogPost> = filter.apply(&posts).into_iter().cloned().collect();
    let total = posts.len();
    let action = category_href(&slugs, &filter.category);

    let chips = categories
        .into_iter()
        .map(|category| {
            let active = category == filter.category;
            let label = if category == ALL { "All Categories".to_string() } else { category.clone() };
            view! {
                <li>
                    <a class="filter-chip" class:active=active href=category_href(&slugs, &category)>{label}</a>
                </li>
            }
        })
        .collect_view();

    let empty_message = if total == 0 {
        "No blog posts yet. Check back soon!"
    } else {
        "No posts match your search criteria."
    };
    let empty_hidden = !visible.is_empty();
    let live_search = if mode == RenderMode::Static { "true" } else { "false" };

    view! {
        <main class="container page blog-list">
            <h1>"Blog"</h1>
            <p class="lead">"Thoughts, tutorials, and insights on software development"</p>
            <form class="blog-search" method="get" action=action data-live-search=live_search>
                <input type="search" name="q" placeholder="Search posts..." value=filter.query.clone()/>
            </form>
            <ul class="filter-bar" aria-label="Filter by category">{chips}</ul>
            <div class="blog-grid">
                {visible.into_iter().map(|post| view! { <BlogCard post=post slugs=slugs.clone()/> }).collect_view()}
            </div>
            <p class="empty-state" data-empty-state="true" hidden=empty_hidden>{empty_message}</p>
        </main>
    }
}

#[component]
pub fn ShareButtons(page_url: String, title: String) -> impl IntoView {
    let encoded_url: String = url::form_urlencoded::byte_serialize(page_url.as_bytes()).collect();
    let encoded_title: String = url::form_urlencoded::byte_serialize(title.as_bytes()).collect();
    let links = [
        (
            "Twitter",
            format!("https://twitter.com/intent/tweet?url={}&text={}", encoded_url, encoded_title),
        ),
        (
            "LinkedIn",
            format!("https://www.linkedin.com/sharing/share-offsite/?url={}", encoded_url),
        ),
        (
            "Facebook",
            format!("https://www.facebook.com/sharer/sharer.php?u={}", encoded_url),
        ),
    ];

    view! {
        <div class="share">
            <span>"Share:"</span>
            {links
                .into_iter()
                .map(|(network, href)| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" aria-label=format!("Share on {}", network)>
                            {network}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Article page body
#[component]
pub fn PostDetail(post: BlogPost, base_url: String, slugs: SelectorSlugs) -> impl IntoView {
    let category_link = category_href(&slugs, &post.category);
    let share_url = format!("{}/blog/{}/", base_url, post.slug);
    let updated = post
        .updated_date
        .map(|d| view! { <span class="updated">{format!("Updated {}", d.format("%B %-d, %Y"))}</span> });
    let byline = format!("By {} · {} · {} min read", post.author, post.display_date(), post.reading_time);

    view! {
        <main class="container page post">
            <nav class="breadcrumb">
                <a href="/blog/">"← Back to Blog"</a>
            </nav>
            <article>
                <header>
                    <a class="category" href=category_link>{post.category.clone()}</a>
                    <h1>{post.title.clone()}</h1>
                    <p class="meta">{byline} {updated}</p>
                    <ul class="tags">
                        {post.tags.iter().map(|t| view! { <li class="tag">{t.clone()}</li> }).collect_view()}
                    </ul>
                </header>
                <img class="cover" src=post.cover_image.clone() alt=post.title.clone()/>
                <div class="prose" inner_html=post.content_html.clone()></div>
                <footer>
                    <ShareButtons page_url=share_url title=post.title.clone()/>
                </footer>
            </article>
        </main>
    }
}

#[component]
pub fn PostNotFound() -> impl IntoView {
    view! {
        <main class="container page not-found">
            <h1>"Post Not Found"</h1>
            <p>"The blog post you're looking for doesn't exist."</p>
            <a class="button" href="/blog/">"Back to Blog"</a>
        </main>
    }
}
