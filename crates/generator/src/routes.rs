//! Site routes and their on-disk locations.

use folio_core::filter::ALL;

/// Every page the site can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Gallery; `tech` is a tag name or tag slug, `all` for no filter
    Projects { tech: String },
    Project { slug: String },
    /// Listing; `category` is a category name or slug, `all` for no filter
    Blog { query: String, category: String },
    Post { slug: String },
    NotFound,
}

impl Route {
    /// Resolve a request path (query string excluded).
    ///
    /// Trailing slashes and a trailing `index.html` are ignored.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches("index.html");
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["projects"] => Route::Projects { tech: ALL.to_string() },
            ["projects", "tech", tech] => Route::Projects { tech: tech.to_string() },
            ["projects", slug] => Route::Project { slug: slug.to_string() },
            ["blog"] => Route::Blog {
                query: String::new(),
                category: ALL.to_string(),
            },
            ["blog", "category", category] => Route::Blog {
                query: String::new(),
                category: category.to_string(),
            },
            ["blog", slug] => Route::Post { slug: slug.to_string() },
            _ => Route::NotFound,
        }
    }

    /// Canonical URL path
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects { tech } if tech == ALL => "/projects/".to_string(),
            Route::Projects { tech } => format!("/projects/tech/{}/", tech),
            Route::Project { slug } => format!("/projects/{}/", slug),
            Route::Blog { category, .. } if category == ALL => "/blog/".to_string(),
            Route::Blog { category, .. } => format!("/blog/category/{}/", category),
            Route::Post { slug } => format!("/blog/{}/", slug),
            Route::NotFound => "/404.html".to_string(),
        }
    }

    /// File written by a static build
    pub fn output_path(&self) -> String {
        match self {
            Route::NotFound => "404.html".to_string(),
            other => format!("{}index.html", other.path().trim_start_matches('/')),
        }
    }
}

/// Slug for an option that slugifies to nothing
const FALLBACK_SLUG: &str = "other";

fn base_slug(option: &str) -> String {
    let slug = slug::slugify(option);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// URL segments for a list of filter options (technologies or categories).
///
/// Each option owns a distinct segment: options whose slugs coincide
/// (`C#` and `C++` both slugify to `c`) take `-2`, `-3`, ... suffixes in
/// list order. Build it from the same option list everywhere so links and
/// written pages agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSlugs {
    entries: Vec<(String, String)>,
}

impl SelectorSlugs {
    pub fn new(options: &[String]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for option in options.iter().filter(|o| o.as_str() != ALL) {
            if entries.iter().any(|(o, _)| o == option) {
                continue;
            }
            let base = base_slug(option);
            let mut slug = base.clone();
            let mut n = 2;
            while slug == ALL || entries.iter().any(|(_, s)| *s == slug) {
                slug = format!("{}-{}", base, n);
                n += 1;
            }
            entries.push((option.clone(), slug));
        }
        Self { entries }
    }

    /// URL segment for `option`; the sentinel maps to itself
    pub fn slug_for(&self, option: &str) -> String {
        if option == ALL {
            return ALL.to_string();
        }
        self.entries
            .iter()
            .find(|(o, _)| o == option)
            .map(|(_, s)| s.clone())
            .unwrap_or_else(|| base_slug(option))
    }

    /// Segments in option order, sentinel excluded
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, s)| s.as_str())
    }

    /// Map a selector from a URL or query string back onto an option.
    ///
    /// Matches an option by name, then by segment. Unknown selectors come
    /// back unchanged so they filter to nothing.
    pub fn resolve(&self, selector: &str) -> String {
        if selector.is_empty() || selector == ALL {
            return ALL.to_string();
        }
        self.entries
            .iter()
            .find(|(o, _)| o == selector)
            .or_else(|| self.entries.iter().find(|(_, s)| s == selector))
            .map(|(o, _)| o.clone())
            .unwrap_or_else(|| selector.to_string())
    }
}

/// Link to the gallery filtered by `tech`
pub fn tech_href(slugs: &SelectorSlugs, tech: &str) -> String {
    Route::Projects { tech: slugs.slug_for(tech) }.path()
}

/// Link to the listing filtered by `category`
pub fn category_href(slugs: &SelectorSlugs, category: &str) -> String {
    Route::Blog {
        query: String::new(),
        category: slugs.slug_for(category),
    }
    .path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/index.html"), Route::Home);
        assert_eq!(Route::from_path("/projects/"), Route::Projects { tech: "all".to_string() });
        assert_eq!(
            Route::from_path("/projects/tech/react"),
            Route::Projects { tech: "react".to_string() }
        );
        assert_eq!(
            Route::from_path("/projects/shop/"),
            Route::Project { slug: "shop".to_string() }
        );
        assert_eq!(
            Route::from_path("/blog/category/engineering/"),
            Route::Blog { query: String::new(), category: "engineering".to_string() }
        );
        assert_eq!(
            Route::from_path("/blog/hello-world/index.html"),
            Route::Post { slug: "hello-world".to_string() }
        );
        assert_eq!(Route::from_path("/nope/at/all/deep"), Route::NotFound);
        assert_eq!(Route::from_path("/about"), Route::NotFound);
    }

    fn options(names: &[&str]) -> Vec<String> {
        std::iter::once(ALL).chain(names.iter().copied()).map(String::from).collect()
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(Route::Home.output_path(), "index.html");
        assert_eq!(
            Route::Projects { tech: "node-js".to_string() }.output_path(),
            "projects/tech/node-js/index.html"
        );
        assert_eq!(Route::Projects { tech: ALL.to_string() }.output_path(), "projects/index.html");
        assert_eq!(Route::Post { slug: "x".to_string() }.output_path(), "blog/x/index.html");
        assert_eq!(Route::NotFound.output_path(), "404.html");
    }

    #[test]
    fn test_path_round_trips_through_from_path() {
        let routes = vec![
            Route::Home,
            Route::Projects { tech: ALL.to_string() },
            Route::Projects { tech: "c-2".to_string() },
            Route::Project { slug: "shop".to_string() },
            Route::Blog { query: String::new(), category: "life".to_string() },
            Route::Post { slug: "hello".to_string() },
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_colliding_options_get_distinct_slugs() {
        let slugs = SelectorSlugs::new(&options(&["C#", "C++", "Node JS", "Node.js", "Rust"]));
        assert_eq!(slugs.slugs().collect::<Vec<_>>(), vec!["c", "c-2", "node-js", "node-js-2", "rust"]);
        assert_eq!(tech_href(&slugs, "C#"), "/projects/tech/c/");
        assert_eq!(tech_href(&slugs, "C++"), "/projects/tech/c-2/");
        assert_eq!(category_href(&slugs, "Node.js"), "/blog/category/node-js-2/");
        assert_eq!(slugs.resolve("c"), "C#");
        assert_eq!(slugs.resolve("c-2"), "C++");
        assert_eq!(slugs.resolve("node-js-2"), "Node.js");
    }

    #[test]
    fn test_suffix_does_not_steal_a_natural_slug() {
        let slugs = SelectorSlugs::new(&options(&["C 2", "C#", "C++"]));
        assert_eq!(slugs.slugs().collect::<Vec<_>>(), vec!["c-2", "c", "c-3"]);
        assert_eq!(slugs.resolve("c-3"), "C++");
    }

    #[test]
    fn test_resolve_selector() {
        let slugs = SelectorSlugs::new(&options(&["Node.js", "React", "+++"]));
        assert_eq!(slugs.resolve("node-js"), "Node.js");
        assert_eq!(slugs.resolve("React"), "React");
        assert_eq!(slugs.resolve("react"), "React");
        assert_eq!(slugs.resolve("other"), "+++");
        assert_eq!(slugs.resolve(""), "all");
        assert_eq!(slugs.resolve("all"), "all");
        assert_eq!(slugs.resolve("elm"), "elm");
        assert_eq!(tech_href(&slugs, ALL), "/projects/");
        assert_eq!(category_href(&slugs, ALL), "/blog/");
    }
}
