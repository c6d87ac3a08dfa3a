//! Landing page sections.

use super::asset_url;
use crate::render::RenderMode;
use chrono::{DateTime, Utc};
use folio_core::contact::{ContactField, ContactForm, ContactStatus};
use folio_core::remote::RemoteData;
use folio_core::{
    ActivityItem, CodingStats, Profile, Skill, Testimonial, TimelineEntry, group_skills,
    sorted_timeline,
};
use leptos::prelude::*;

/// Activity entries shown on the landing page
pub const ACTIVITY_LIMIT: usize = 5;

pub fn coding_profile_url(username: &str) -> String {
    format!("https://leetcode.com/u/{}/", username)
}

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let avatar = profile.avatar.as_deref().map(|path| {
        view! { <img class="hero-avatar" src=asset_url(path) alt=profile.name.clone()/> }
    });
    let resume = profile.resume_url.clone().map(|url| {
        view! { <a class="button button-outline" href=url target="_blank" rel="noopener noreferrer">"Resume"</a> }
    });

    view! {
        <section id="hero" class="hero">
            <div class="container hero-inner">
                <div class="hero-text">
                    <p class="hero-greeting">"Hi, I'm"</p>
                    <h1>{profile.name}</h1>
                    <h2 class="hero-role">{profile.role}</h2>
                    <p class="hero-tagline">{profile.tagline}</p>
                    <div class="hero-actions">
                        <a class="button" href="/projects/">"View Projects"</a>
                        <a class="button button-outline" href="#contact">"Contact Me"</a>
                        {resume}
                    </div>
                </div>
                {avatar}
            </div>
        </section>
    }
}

/// About section with the coding-statistics popup
#[component]
pub fn About(
    profile: Profile,
    stats_username: Option<String>,
    stats: RemoteData<CodingStats>,
    mode: RenderMode,
) -> impl IntoView {
    let location = profile
        .location
        .clone()
        .map(|loc| view! { <li><strong>"Location: "</strong>{loc}</li> });
    let mailto = format!("mailto:{}", profile.email);

    let popup = stats_username.map(|username| {
        let body = match mode {
            // Preview fetches on open; the panel replaces this placeholder.
            RenderMode::Preview => view! {
                <div class="stats-body" data-stats-src="/stats">
                    <p class="stats-loading">"Loading your LeetCode stats..."</p>
                </div>
            }
            .into_any(),
            RenderMode::Static => view! {
                <div class="stats-body">
                    <StatsPanel username=username.clone() state=stats/>
                </div>
            }
            .into_any(),
        };
        view! {
            <details class="stats-popup">
                <summary class="button">"My LeetCode Profile"</summary>
                <div class="stats-dialog">
                    <h3>"LeetCode Profile"</h3>
                    {body}
                </div>
            </details>
        }
    });

    view! {
        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title">"About " <span class="highlight">"Me"</span></h2>
                <div class="about-grid">
                    <div class="about-bio">
                        {profile.bio.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                    </div>
                    <ul class="about-facts">
                        <li><strong>"Name: "</strong>{profile.name}</li>
                        <li><strong>"Email: "</strong><a href=mailto>{profile.email}</a></li>
                        {location}
                    </ul>
                </div>
                {popup}
            </div>
        </section>
    }
}

/// Body of the statistics popup for each loading state
#[component]
pub fn StatsPanel(username: String, state: RemoteData<CodingStats>) -> impl IntoView {
    let profile_url = coding_profile_url(&username);
    match state {
        RemoteData::Success(stats) => {
            let cell = |label: &'static str, value: String| {
                view! {
                    <div class="stat">
                        <h4>{label}</h4>
                        <p>{value}</p>
                    </div>
                }
            };
            view! {
                <div class="stats-panel">
                    <h4 class="stats-user">{username.clone()}</h4>
                    <div class="stats-grid">
                        {cell("Total Solved", stats.total_solved.to_string())}
                        {cell("Total Questions", stats.total_questions.to_string())}
                        {cell("Easy Solved", stats.easy_solved.to_string())}
                        {cell("Medium Solved", stats.medium_solved.to_string())}
                        {cell("Hard Solved", stats.hard_solved.to_string())}
                    </div>
                    <p class="stats-rank">"Global Ranking: #" {stats.ranking.to_string()}</p>
                    <a class="button" href=profile_url target="_blank" rel="noopener noreferrer">
                        "View Full Profile"
                    </a>
                </div>
            }
            .into_any()
        }
        RemoteData::Loading => view! {
            <p class="stats-loading">"Loading your LeetCode stats..."</p>
        }
        .into_any(),
        RemoteData::Idle | RemoteData::Error(_) => view! {
            <div class="stats-panel stats-fallback">
                <p class="error">"Sorry, there was a problem while loading your LeetCode profile."</p>
                <a class="button" href=profile_url target="_blank" rel="noopener noreferrer">
                    "Visit On LeetCode"
                </a>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
    let groups = group_skills(&skills);

    view! {
        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title">"Technical " <span class="highlight">"Skills"</span></h2>
                {groups
                    .into_iter()
                    .map(|(category, members)| {
                        view! {
                            <div class="skill-group">
                                <h3>{category}</h3>
                                <div class="skill-tags">
                                    {members.into_iter().map(|skill| view! { <SkillBadge skill=skill/> }).collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillBadge(skill: Skill) -> impl IntoView {
    let filled = skill.level.dots();
    let dots = (0..4u8)
        .map(|i| {
            let class = if i < filled { "dot filled" } else { "dot" };
            view! { <span class=class></span> }
        })
        .collect_view();

    view! {
        <span class=format!("skill skill-{}", skill.level.as_str()) title=skill.level.as_str()>
            {skill.name}
            <span class="skill-dots">{dots}</span>
        </span>
    }
}

#[component]
pub fn Timeline(entries: Vec<TimelineEntry>) -> impl IntoView {
    let entries = sorted_timeline(&entries);

    view! {
        <section id="experience" class="section timeline">
            <div class="container">
                <h2 class="section-title">"Experience & " <span class="highlight">"Education"</span></h2>
                <ol class="timeline-list">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let period = entry.period();
                            view! {
                                <li class=format!("timeline-item timeline-{}", entry.kind.as_str())>
                                    <div class="timeline-head">
                                        <h3>{entry.title}</h3>
                                        <span class="timeline-period">{period}</span>
                                    </div>
                                    <p class="timeline-org">{entry.organization}</p>
                                    <p>{entry.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <h2 class="section-title">"Client " <span class="highlight">"Testimonials"</span></h2>
                <div class="testimonial-grid">
                    {testimonials
                        .into_iter()
                        .map(|t| {
                            let stars = "★".repeat(t.rating as usize);
                            let byline = format!("{} at {}", t.role, t.company);
                            let avatar = t
                                .avatar
                                .as_deref()
                                .map(|path| view! { <img class="avatar" src=asset_url(path) alt=t.name.clone()/> });
                            view! {
                                <figure class="testimonial">
                                    <div class="rating" aria-label=format!("{} out of 5", t.rating)>{stars}</div>
                                    <blockquote>{t.content}</blockquote>
                                    <figcaption>
                                        {avatar}
                                        <div>
                                            <h4>{t.name}</h4>
                                            <p>{byline}</p>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ActivityFeed(items: Vec<ActivityItem>, now: DateTime<Utc>) -> impl IntoView {
    let body = if items.is_empty() {
        view! { <p class="empty-state">"No recent activity available"</p> }.into_any()
    } else {
        view! {
            <ul class="activity-list">
                {items
                    .into_iter()
                    .take(ACTIVITY_LIMIT)
                    .map(|item| {
                        let when = item.relative_date(now);
                        view! {
                            <li>
                                <a class="activity" href=item.url target="_blank" rel="noopener noreferrer">
                                    <h3>{item.repo}</h3>
                                    <p>{item.description}</p>
                                    <p class="activity-date">{when}</p>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section id="activity" class="section activity-feed">
            <div class="container">
                <h2 class="section-title">"Recent " <span class="highlight">"GitHub Activity"</span></h2>
                {body}
            </div>
        </section>
    }
}

/// Contact section. Without an `action` the form is replaced by a mail link.
#[component]
pub fn Contact(
    email: String,
    action: Option<String>,
    form: ContactForm,
    status: ContactStatus,
) -> impl IntoView {
    let mailto = format!("mailto:{}", email);
    let field_error = |field: ContactField| {
        status
            .field_error(field)
            .map(|message| view! { <p class="field-error">{message}</p> })
    };
    let name_error = field_error(ContactField::Name);
    let email_error = field_error(ContactField::Email);
    let message_error = field_error(ContactField::Message);
    let banner = status.banner().map(|text| {
        let class = if status == ContactStatus::Sent { "form-status success" } else { "form-status error" };
        view! { <p class=class>{text}</p> }
    });

    let body = match action {
        Some(action) => view! {
            <form class="contact-form" method="post" action=action>
                <label>
                    "Name"
                    <input type="text" name="name" placeholder="Your Name" value=form.name/>
                </label>
                {name_error}
                <label>
                    "Email"
                    <input type="email" name="email" placeholder="Your Email" value=form.email/>
                </label>
                {email_error}
                <label>
                    "Message"
                    <textarea name="message" rows="5" placeholder="Your Message">{form.message}</textarea>
                </label>
                {message_error}
                <button class="button" type="submit">"Send Message"</button>
                {banner}
            </form>
        }
        .into_any(),
        None => view! {
            <p class="contact-fallback">
                "Drop me a line at " <a href=mailto.clone()>{email.clone()}</a>
            </p>
        }
        .into_any(),
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">"Get in " <span class="highlight">"Touch"</span></h2>
                <p class="section-lead">
                    "Have a project in mind or just want to chat about code? Drop me a message."
                </p>
                <div class="contact-grid">
                    {body}
                    <div class="contact-info">
                        <h3>"Contact Info"</h3>
                        <a href=mailto>{email}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
