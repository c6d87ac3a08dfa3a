use super::Chrome;
use crate::render::RenderMode;
use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("About", "/#about"),
    ("Projects", "/projects/"),
    ("Blog", "/blog/"),
    ("Reviews", "/#testimonials"),
    ("Contact", "/#contact"),
];

/// Hot reload via Server-Sent Events (preview only)
const RELOAD_SCRIPT: &str = r#"
const eventSource = new EventSource('/_reload');
eventSource.onmessage = () => location.reload();
eventSource.onerror = () => eventSource.close();
"#;

/// Document shell: head, navigation bar, page body, footer
#[component]
pub fn Layout(chrome: Chrome, title: String, description: String, children: Children) -> impl IntoView {
    let theme = chrome.theme.theme().as_str();
    let inline_css = format!(
        "{}\n:root {{ --brand: {}; }}",
        chrome.theme.colors().css_variables(),
        chrome.accent_color
    );
    let full_title = if title.is_empty() {
        chrome.site_name.clone()
    } else {
        format!("{} | {}", title, chrome.site_name)
    };
    let reload = (chrome.mode == RenderMode::Preview)
        .then(|| view! { <script inner_html=RELOAD_SCRIPT></script> });
    let nav_chrome = chrome.clone();

    view! {
        <html lang="en" data-theme=theme class=theme>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
                <meta name="description" content=description/>
                <title>{full_title}</title>
                <link rel="stylesheet" href="/style.css"/>
                <style inner_html=inline_css></style>
            </head>
            <body>
                <Navbar chrome=nav_chrome/>
                {children()}
                <Footer chrome=chrome/>
                <script src="/site.js" defer=true></script>
                {reload}
            </body>
        </html>
    }
}

#[component]
pub fn Navbar(chrome: Chrome) -> impl IntoView {
    let next = chrome.theme.toggled().theme();
    let label = format!("Switch to {} theme", next);
    let toggle = match chrome.mode {
        RenderMode::Preview => view! {
            <a class="theme-toggle" href=format!("?theme={}", next) aria-label=label.clone()>
                {if next.as_str() == "light" { "☀" } else { "☾" }}
            </a>
        }
        .into_any(),
        RenderMode::Static => view! {
            <button class="theme-toggle" type="button" data-theme-toggle="true" aria-label=label>
                "◐"
            </button>
        }
        .into_any(),
    };

    view! {
        <header class="navbar">
            <nav class="container nav-inner">
                <a class="brand" href="/">{chrome.site_name}</a>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! { <li><a href=*href>{*name}</a></li> })
                        .collect_view()}
                </ul>
                {toggle}
            </nav>
        </header>
    }
}

#[component]
pub fn Footer(chrome: Chrome) -> impl IntoView {
    let copyright = format!("© {} {}. All rights reserved.", chrome.year, chrome.site_name);
    let mailto = format!("mailto:{}", chrome.email);

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3>{chrome.site_name}</h3>
                    <p>{chrome.tagline}</p>
                    <ul class="social-links">
                        {chrome
                            .social
                            .into_iter()
                            .map(|(label, url)| {
                                view! {
                                    <li>
                                        <a href=url target="_blank" rel="noopener noreferrer">{label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-links">
                    <h3>"Quick Links"</h3>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .map(|(name, href)| view! { <li><a href=*href>{*name}</a></li> })
                            .collect_view()}
                        <li><a href=mailto>"Email"</a></li>
                    </ul>
                </div>
            </div>
            <p class="copyright">{copyright}</p>
        </footer>
    }
}
